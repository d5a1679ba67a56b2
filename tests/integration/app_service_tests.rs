//! Integration tests for the AppService → transition → actuators pipeline.
//!
//! These run on the host and verify that a scripted sequence of input
//! snapshots ends up as the right relay and motor commands, events, and
//! counters without any real hardware.

use super::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

use lavabot::app::commands::AppCommand;
use lavabot::app::events::AppEvent;
use lavabot::app::service::AppService;
use lavabot::config::SystemConfig;
use lavabot::fsm::mission::RobotMode;
use lavabot::{MotorCommand, OperatingMode, SystemInputs};

fn make_app() -> (AppService, MockHardware, RecordingSink) {
    let mut app = AppService::new(SystemConfig::default());
    let hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, hw, sink)
}

fn at(hour: i32, minute: i32) -> SystemInputs {
    SystemInputs {
        hour,
        minute,
        ..SystemInputs::default()
    }
}

#[test]
fn start_emits_initial_state() {
    let (app, _hw, sink) = make_app();
    assert!(matches!(sink.events[0], AppEvent::Started(st) if st.auto_mode));
    assert_eq!(app.state().mode(), OperatingMode::Automatic);
}

#[test]
fn auto_window_drives_forward_with_uv_on() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.push(at(9, 0));
    app.tick(&mut hw, &mut sink);

    assert_eq!(hw.motors(), MotorCommand::Forward);
    assert!(hw.relay_on());
    assert_eq!(app.mission().mode, RobotMode::Auto);
    assert!(app.mission().moving);
    assert_eq!(
        sink.count(|e| matches!(
            e,
            AppEvent::MotorsChanged {
                from: MotorCommand::Stop,
                to: MotorCommand::Forward
            }
        )),
        1
    );
    assert_eq!(sink.count(|e| matches!(e, AppEvent::RelayChanged(true))), 1);
}

#[test]
fn leaving_window_stops() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.push(at(9, 59));
    hw.push(at(10, 0));
    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.motors(), MotorCommand::Forward);
    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.motors(), MotorCommand::Stop);
    assert_eq!(app.stats().auto_forward_cycles, 1);
}

#[test]
fn motion_cuts_uv_immediately() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.push(at(9, 10));
    hw.push(SystemInputs {
        motion_detected: true,
        ..at(9, 11)
    });
    app.tick(&mut hw, &mut sink);
    assert!(hw.relay_on());

    app.tick(&mut hw, &mut sink);
    assert!(!hw.relay_on());
    assert!(!app.state().relay_on);
    // Automatic motion ignores the PIR.
    assert_eq!(hw.motors(), MotorCommand::Forward);
    assert_eq!(app.stats().uv_cutoffs, 1);
}

#[test]
fn input_failure_runs_fail_safe_cycle() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.push(at(9, 0));
    hw.push_read_error();
    app.tick(&mut hw, &mut sink);
    assert!(hw.relay_on());

    app.tick(&mut hw, &mut sink);
    assert!(!hw.relay_on());
    assert_eq!(hw.motors(), MotorCommand::Stop);
    assert!(app.state().auto_mode, "fail-safe inputs never toggle mode");
    assert_eq!(app.stats().input_faults, 1);
}

#[test]
fn manual_driving_session() {
    let (mut app, mut hw, mut sink) = make_app();

    hw.push(SystemInputs {
        mode_toggle_pressed: true,
        ..SystemInputs::default()
    });
    hw.push(SystemInputs {
        forward_pressed: true,
        ..SystemInputs::default()
    });
    hw.push(SystemInputs::default());
    hw.push(SystemInputs {
        mode_toggle_pressed: true,
        ..SystemInputs::default()
    });

    app.tick(&mut hw, &mut sink);
    assert!(!app.state().auto_mode);
    assert_eq!(
        sink.count(|e| matches!(
            e,
            AppEvent::ModeChanged {
                from: OperatingMode::Automatic,
                to: OperatingMode::Manual
            }
        )),
        1
    );

    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.motors(), MotorCommand::Forward);

    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.motors(), MotorCommand::Stop);

    app.tick(&mut hw, &mut sink);
    assert!(app.state().auto_mode);
    assert_eq!(app.stats().mode_toggles, 2);
}

#[test]
fn emergency_latch_holds_outputs_off() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.push(at(9, 0));
    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.motors(), MotorCommand::Forward);

    app.handle_command(AppCommand::EmergencyStop, &mut hw, &mut sink);
    assert!(app.is_emergency());
    assert_eq!(hw.calls.last(), Some(&ActuatorCall::AllOff));
    assert_eq!(sink.count(|e| matches!(e, AppEvent::EmergencyLatched)), 1);

    // Window still open, no motion: latch wins.
    for m in 1..10 {
        hw.push(SystemInputs {
            forward_pressed: true,
            mode_toggle_pressed: true,
            ..at(9, m)
        });
        app.tick(&mut hw, &mut sink);
        assert!(!hw.relay_on());
        assert_eq!(hw.motors(), MotorCommand::Stop);
        assert!(!app.state().relay_on);
    }

    // Second stop is a no-op.
    app.handle_command(AppCommand::EmergencyStop, &mut hw, &mut sink);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::EmergencyLatched)), 1);
}

#[test]
fn emergency_reset_resumes_in_manual() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::EmergencyStop, &mut hw, &mut sink);
    app.handle_command(AppCommand::ResetEmergency, &mut hw, &mut sink);

    assert!(!app.is_emergency());
    assert_eq!(app.mission().mode, RobotMode::Manual);
    assert!(!app.state().auto_mode);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::EmergencyCleared)), 1);

    // Inside the window but manual: no movement; relay follows PIR again.
    hw.push(at(9, 0));
    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.motors(), MotorCommand::Stop);
    assert!(hw.relay_on());
}

#[test]
fn reset_without_latch_is_ignored() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::ResetEmergency, &mut hw, &mut sink);
    assert!(app.state().auto_mode);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::EmergencyCleared)), 0);
}

#[test]
fn finishing_uv_cycle_parks_with_aux_relay() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.push(at(14, 30));
    app.tick(&mut hw, &mut sink);

    app.handle_command(AppCommand::FinishUvCycle, &mut hw, &mut sink);
    assert!(hw.aux_relay_on());
    assert!(!hw.relay_on());
    assert_eq!(hw.motors(), MotorCommand::Stop);
    assert!(app.mission().aux_relay_on);
    assert_eq!(app.mission().mode, RobotMode::Auto);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::UvCycleFinished)), 1);

    // Next cycle resumes normal control and releases the aux relay.
    hw.push(at(14, 31));
    app.tick(&mut hw, &mut sink);
    assert!(!hw.aux_relay_on());
    assert!(hw.relay_on());
    assert_eq!(hw.motors(), MotorCommand::Forward);
}

#[test]
fn finish_ignored_while_latched() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::EmergencyStop, &mut hw, &mut sink);
    app.handle_command(AppCommand::FinishUvCycle, &mut hw, &mut sink);
    assert!(app.is_emergency());
    assert!(!hw.aux_relay_on());
}

#[test]
fn config_update_moves_windows() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut cfg = SystemConfig::default();
    cfg.auto_window_hours.clear();
    cfg.auto_window_hours.push(20).unwrap();
    app.handle_command(AppCommand::UpdateConfig(cfg), &mut hw, &mut sink);
    assert_eq!(app.config().auto_window_hours.as_slice(), &[20]);

    hw.push(at(9, 0));
    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.motors(), MotorCommand::Stop);

    hw.push(at(20, 0));
    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.motors(), MotorCommand::Forward);
}

#[test]
fn invalid_config_update_is_rejected() {
    let (mut app, mut hw, mut sink) = make_app();
    let cfg = SystemConfig {
        telemetry_interval_cycles: 0,
        ..SystemConfig::default()
    };
    app.handle_command(AppCommand::UpdateConfig(cfg), &mut hw, &mut sink);
    assert_eq!(app.config(), &SystemConfig::default());
    assert_eq!(sink.count(|e| matches!(e, AppEvent::ConfigRejected(_))), 1);
}

#[test]
fn telemetry_every_interval() {
    let mut app = AppService::new(SystemConfig {
        telemetry_interval_cycles: 10,
        ..SystemConfig::default()
    });
    let mut hw = MockHardware::new();
    hw.idle = at(9, 5);
    let mut sink = RecordingSink::new();

    for _ in 0..35 {
        app.tick(&mut hw, &mut sink);
    }
    let telem: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Telemetry(t) => Some(t.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(telem.len(), 3);
    assert_eq!(telem[0].stats.cycles, 10);
    assert_eq!(telem[2].stats.cycles, 30);
    assert!(telem[0].in_window);
    assert_eq!(telem[0].hour, 9);
    assert_eq!(telem[0].state.motors, MotorCommand::Forward);
}

#[test]
fn motor_write_failure_forces_all_off() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.fail_motor_writes = true;
    hw.push(at(9, 0));
    app.tick(&mut hw, &mut sink);

    assert_eq!(hw.calls.last(), Some(&ActuatorCall::AllOff));
    assert!(!hw.relay_on());
    assert_eq!(app.stats().actuator_faults, 1);
}

#[test]
fn relay_tracks_pir_across_a_morning() {
    let (mut app, mut hw, mut sink) = make_app();
    for i in 0..120 {
        let inputs = SystemInputs {
            motion_detected: i % 3 == 0,
            ..at(8 + i / 60, i % 60)
        };
        hw.push(inputs);
        app.tick(&mut hw, &mut sink);

        assert_eq!(app.state().relay_on, !inputs.motion_detected);
        assert_eq!(hw.relay_on(), !inputs.motion_detected);
        let expected = if inputs.hour == 9 {
            MotorCommand::Forward
        } else {
            MotorCommand::Stop
        };
        assert_eq!(hw.motors(), expected, "at {}:{}", inputs.hour, inputs.minute);
    }
    assert_eq!(app.stats().cycles, 120);
}

#[test]
fn relay_write_failure_skips_remaining_writes() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.fail_relay_writes = true;
    hw.push(at(9, 0));
    app.tick(&mut hw, &mut sink);

    assert_eq!(hw.calls, vec![ActuatorCall::AllOff]);
    assert_eq!(hw.motors(), MotorCommand::Stop);
    assert_eq!(app.stats().actuator_faults, 1);
}

#[test]
fn failed_uv_finish_leaves_aux_relay_released() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.push(at(14, 0));
    app.tick(&mut hw, &mut sink);

    hw.fail_relay_writes = true;
    app.handle_command(AppCommand::FinishUvCycle, &mut hw, &mut sink);
    assert_eq!(hw.calls.last(), Some(&ActuatorCall::AllOff));
    assert!(!hw.aux_relay_on());
    assert!(!app.mission().aux_relay_on);
    assert_eq!(app.stats().actuator_faults, 1);
}
