//! Fuzz target: control-cycle transition
//!
//! Feeds arbitrary input sequences through `update` and checks after
//! every step:
//! - The relay is exactly the inverse of the motion flag
//! - Automatic mode only ever drives forward, and only inside a window
//! - The mode flips exactly when the toggle flag is set
//!
//! cargo fuzz run fuzz_update

#![no_main]

use libfuzzer_sys::fuzz_target;
use lavabot::{MotorCommand, SystemInputs, SystemState, in_window, update};

/// Bytes per step: one flag byte plus little-endian hour and minute.
const STEP_LEN: usize = 9;

fn decode(chunk: &[u8]) -> SystemInputs {
    let flags = chunk[0];
    let hour = i32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
    let minute = i32::from_le_bytes([chunk[5], chunk[6], chunk[7], chunk[8]]);
    SystemInputs {
        mode_toggle_pressed: flags & 0x01 != 0,
        motion_detected: flags & 0x02 != 0,
        forward_pressed: flags & 0x04 != 0,
        backward_pressed: flags & 0x08 != 0,
        left_pressed: flags & 0x10 != 0,
        right_pressed: flags & 0x20 != 0,
        hour,
        minute,
    }
}

fuzz_target!(|data: &[u8]| {
    let mut state = SystemState::default();

    for chunk in data.chunks_exact(STEP_LEN) {
        let inputs = decode(chunk);
        let next = update(state, &inputs);

        assert_eq!(next.relay_on, !inputs.motion_detected);
        assert_eq!(next.auto_mode != state.auto_mode, inputs.mode_toggle_pressed);
        if next.auto_mode {
            let expected = if in_window(inputs.hour, inputs.minute) {
                MotorCommand::Forward
            } else {
                MotorCommand::Stop
            };
            assert_eq!(next.motors, expected);
        }

        state = next;
    }
});
