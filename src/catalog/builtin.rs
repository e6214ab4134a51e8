//! The default event catalog.
//!
//! Text lines are looked up through [`TextSource`] under `"<event>.<n>"`
//! keys with English fallbacks, so a translation table only has to list
//! the lines it overrides.

use std::time::Duration;

use crate::alert::builder::ms;
use crate::alert::{
    AlertBuilder, AlertSize, AlertSpec, AlertStatus, AudibleAlert, Priority, VisualAlert,
};
use crate::app::ports::TextSource;
use crate::category::EventCategory as ET;
use crate::ids::EventName as E;

use super::{AlertSource, Catalog, FactoryId};

/// 0.75 Hz re-trigger.
const RATE_075: Duration = ms(1333);
/// 0.5 Hz re-trigger.
const RATE_05: Duration = ms(2000);

impl Catalog {
    /// Every event this build knows, with its stock alerts.
    #[allow(clippy::too_many_lines)]
    pub fn builtin(builder: AlertBuilder, texts: &dyn TextSource) -> Self {
        let mut cat = Catalog::new(builder);
        let b = cat.builder().clone();
        let tr = |key: &str, fallback: &str| texts.text_or(key, fallback);

        // Small-banner informational warning, the most common shape here.
        let banner = |text: String, audible: AudibleAlert, duration: Duration| -> AlertSpec {
            b.alert(
                text,
                "",
                AlertStatus::Normal,
                AlertSize::Small,
                Priority::Low,
                VisualAlert::None,
                audible,
                duration,
            )
        };
        let soft = |text: String| AlertSource::dynamic(FactoryId::SoftDisable, [text]);
        let user_soft = |text: String| AlertSource::dynamic(FactoryId::UserSoftDisable, [text]);
        let no_entry = |text: String| b.no_entry(text, VisualAlert::None);

        // ── No alerts ──────────────────────────────────────────

        cat.declare(E::StockFcw);
        cat.declare(E::CruiseMismatch);

        // ── Shown in all states ────────────────────────────────

        cat.insert(
            E::JoystickDebug,
            ET::Warning,
            AlertSource::dynamic(FactoryId::Joystick, []),
        );
        cat.insert(
            E::JoystickDebug,
            ET::Permanent,
            b.normal_permanent(tr("joystickDebug.1", "Joystick Mode"), ""),
        );

        cat.insert(
            E::ControlsInitializing,
            ET::NoEntry,
            no_entry(tr("controlsInitializing.1", "System Initializing")),
        );

        cat.insert(
            E::Startup,
            ET::Permanent,
            b.startup(
                tr("startup.1", "Be ready to take over at any time"),
                None,
                AlertStatus::Normal,
            ),
        );
        cat.insert(
            E::StartupMaster,
            ET::Permanent,
            b.startup(
                tr("startupMaster.1", "WARNING: This branch is not tested"),
                None,
                AlertStatus::UserPrompt,
            ),
        );
        cat.insert(
            E::StartupNoControl,
            ET::Permanent,
            b.startup(tr("startupNoControl.1", "Dashcam mode"), None, AlertStatus::Normal),
        );
        cat.insert(
            E::StartupNoCar,
            ET::Permanent,
            b.startup(
                tr("startupNoCar.1", "Dashcam mode for unsupported car"),
                None,
                AlertStatus::Normal,
            ),
        );
        cat.insert(
            E::StartupNoFw,
            ET::Permanent,
            b.startup(
                tr("startupNoFw.1", "Car Unrecognized"),
                Some(tr("startupNoFw.2", "Check comma power connections")),
                AlertStatus::UserPrompt,
            ),
        );

        cat.insert(
            E::DashcamMode,
            ET::Permanent,
            b.permanent_with(tr("dashcamMode.1", "Dashcam Mode"), "", Priority::Lowest, ms(200)),
        );
        cat.insert(
            E::InvalidLkasSetting,
            ET::Permanent,
            b.normal_permanent(
                tr("invalidLkasSetting.1", "Stock LKAS is turned on"),
                tr("invalidLkasSetting.2", "Turn off stock LKAS to engage"),
            ),
        );
        cat.insert(
            E::CarUnrecognized,
            ET::Permanent,
            b.permanent_with(
                tr("carUnrecognized.1", "Dashcam Mode"),
                tr("carUnrecognized.2", "Car Unrecognized"),
                Priority::Lowest,
                ms(200),
            ),
        );

        cat.insert(
            E::StockAeb,
            ET::Permanent,
            b.alert(
                tr("stockAeb.1", "BRAKE!"),
                tr("stockAeb.2", "Stock AEB: Risk of Collision"),
                AlertStatus::Critical,
                AlertSize::Full,
                Priority::Highest,
                VisualAlert::Fcw,
                AudibleAlert::None,
                ms(2000),
            ),
        );
        cat.insert(
            E::StockAeb,
            ET::NoEntry,
            no_entry(tr("stockAeb.3", "Stock AEB: Risk of Collision")),
        );

        cat.insert(
            E::Fcw,
            ET::Permanent,
            b.alert(
                tr("fcw.1", "BRAKE!"),
                tr("fcw.2", "Risk of Collision"),
                AlertStatus::Critical,
                AlertSize::Full,
                Priority::Highest,
                VisualAlert::Fcw,
                AudibleAlert::WarningSoft,
                ms(2000),
            ),
        );
        cat.insert(
            E::Ldw,
            ET::Permanent,
            b.alert(
                tr("ldw.1", "Lane Departure Detected"),
                "",
                AlertStatus::UserPrompt,
                AlertSize::Small,
                Priority::Low,
                VisualAlert::Ldw,
                AudibleAlert::Prompt,
                ms(3000),
            ),
        );

        // ── Shown while engaged ────────────────────────────────

        cat.insert(
            E::GasPressed,
            ET::PreEnable,
            b.delayed(
                b.alert(
                    tr("gasPressed.1", "Release Gas Pedal to Engage"),
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Lowest,
                    VisualAlert::None,
                    AudibleAlert::None,
                    ms(100),
                ),
                ms(1000),
            ),
        );

        cat.insert(
            E::VehicleModelInvalid,
            ET::NoEntry,
            no_entry(tr("vehicleModelInvalid.1", "Vehicle Parameter Identification Failed")),
        );
        cat.insert(
            E::VehicleModelInvalid,
            ET::SoftDisable,
            soft(tr("vehicleModelInvalid.2", "Vehicle Parameter Identification Failed")),
        );

        cat.insert(
            E::SteerTempUnavailableSilent,
            ET::Warning,
            b.alert(
                tr("steerTempUnavailableSilent.1", "Steering Temporarily Unavailable"),
                "",
                AlertStatus::UserPrompt,
                AlertSize::Small,
                Priority::Low,
                VisualAlert::SteerRequired,
                AudibleAlert::Prompt,
                ms(1000),
            ),
        );

        cat.insert(
            E::PreDriverDistracted,
            ET::Warning,
            banner(tr("preDriverDistracted.1", "Pay Attention"), AudibleAlert::None, ms(100)),
        );
        cat.insert(
            E::PromptDriverDistracted,
            ET::Warning,
            b.alert(
                tr("promptDriverDistracted.1", "Pay Attention"),
                tr("promptDriverDistracted.2", "Driver Distracted"),
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Mid,
                VisualAlert::SteerRequired,
                AudibleAlert::PromptDistracted,
                ms(100),
            ),
        );
        cat.insert(
            E::DriverDistracted,
            ET::Warning,
            b.alert(
                tr("driverDistracted.1", "DISENGAGE IMMEDIATELY"),
                tr("driverDistracted.2", "Driver Distracted"),
                AlertStatus::Critical,
                AlertSize::Full,
                Priority::High,
                VisualAlert::SteerRequired,
                AudibleAlert::WarningImmediate,
                ms(100),
            ),
        );
        cat.insert(
            E::PreDriverUnresponsive,
            ET::Warning,
            b.repeating(
                b.alert(
                    tr("preDriverUnresponsive.1", "Touch Steering Wheel: No Face Detected"),
                    "",
                    AlertStatus::Normal,
                    AlertSize::Small,
                    Priority::Low,
                    VisualAlert::SteerRequired,
                    AudibleAlert::None,
                    ms(100),
                ),
                RATE_075,
            ),
        );
        cat.insert(
            E::PromptDriverUnresponsive,
            ET::Warning,
            b.alert(
                tr("promptDriverUnresponsive.1", "Touch Steering Wheel"),
                tr("promptDriverUnresponsive.2", "Driver Unresponsive"),
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Mid,
                VisualAlert::SteerRequired,
                AudibleAlert::PromptDistracted,
                ms(100),
            ),
        );
        cat.insert(
            E::DriverUnresponsive,
            ET::Warning,
            b.alert(
                tr("driverUnresponsive.1", "DISENGAGE IMMEDIATELY"),
                tr("driverUnresponsive.2", "Driver Unresponsive"),
                AlertStatus::Critical,
                AlertSize::Full,
                Priority::High,
                VisualAlert::SteerRequired,
                AudibleAlert::WarningImmediate,
                ms(100),
            ),
        );

        for (event, key, t1, t2) in [
            (E::ManualRestart, "manualRestart", "TAKE CONTROL", "Resume Driving Manually"),
            (E::ResumeRequired, "resumeRequired", "STOPPED", "Press Resume to Go"),
        ] {
            cat.insert(
                event,
                ET::Warning,
                b.alert(
                    tr(&format!("{key}.1"), t1),
                    tr(&format!("{key}.2"), t2),
                    AlertStatus::UserPrompt,
                    AlertSize::Mid,
                    Priority::Low,
                    VisualAlert::None,
                    AudibleAlert::None,
                    ms(200),
                ),
            );
        }

        cat.insert(
            E::BelowSteerSpeed,
            ET::Warning,
            AlertSource::dynamic(FactoryId::BelowSteerSpeed, []),
        );

        cat.insert(
            E::PreLaneChangeLeft,
            ET::Warning,
            b.repeating(
                banner(
                    tr("preLaneChangeLeft.1", "Steer Left to Start Lane Change Once Safe"),
                    AudibleAlert::None,
                    ms(100),
                ),
                RATE_075,
            ),
        );
        cat.insert(
            E::PreLaneChangeRight,
            ET::Warning,
            b.repeating(
                banner(
                    tr("preLaneChangeRight.1", "Steer Right to Start Lane Change Once Safe"),
                    AudibleAlert::None,
                    ms(100),
                ),
                RATE_075,
            ),
        );
        cat.insert(
            E::LaneChangeBlocked,
            ET::Warning,
            b.alert(
                tr("laneChangeBlocked.1", "Car Detected in Blindspot"),
                "",
                AlertStatus::UserPrompt,
                AlertSize::Small,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::Prompt,
                ms(100),
            ),
        );
        cat.insert(
            E::LaneChange,
            ET::Warning,
            banner(tr("laneChange.1", "Changing Lanes"), AudibleAlert::None, ms(100)),
        );
        cat.insert(
            E::E2eLongAlert,
            ET::Warning,
            b.alert(
                tr("e2eLongAlert.1", "Lead Car Departed"),
                tr("e2eLongAlert.2", "Check Road Ahead"),
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::Warning,
                ms(2000),
            ),
        );
        cat.insert(
            E::LaneChangeManual,
            ET::Warning,
            b.repeating(
                b.alert(
                    tr("laneChangeManual.1", "Turn Signal On"),
                    tr("laneChangeManual.2", "Steering Control Paused"),
                    AlertStatus::UserPrompt,
                    AlertSize::Mid,
                    Priority::Low,
                    VisualAlert::None,
                    AudibleAlert::None,
                    ms(100),
                ),
                RATE_075,
            ),
        );
        cat.insert(
            E::EmgButtonManual,
            ET::Warning,
            b.repeating(
                b.alert(
                    tr("emgButtonManual.1", "Hazard Lights On"),
                    "",
                    AlertStatus::UserPrompt,
                    AlertSize::Small,
                    Priority::Low,
                    VisualAlert::None,
                    AudibleAlert::None,
                    ms(100),
                ),
                RATE_075,
            ),
        );
        cat.insert(
            E::DriverSteering,
            ET::Warning,
            b.repeating(
                b.alert(
                    tr("driverSteering.1", "Driver Steering"),
                    tr("driverSteering.2", "Steering Control Paused"),
                    AlertStatus::UserPrompt,
                    AlertSize::Mid,
                    Priority::Low,
                    VisualAlert::None,
                    AudibleAlert::None,
                    ms(100),
                ),
                RATE_075,
            ),
        );
        cat.insert(
            E::SteerSaturated,
            ET::Warning,
            b.alert(
                tr("steerSaturated.1", "TAKE CONTROL"),
                tr("steerSaturated.2", "Turn Exceeds Steering Limit"),
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::Prompt,
                ms(1000),
            ),
        );

        for (event, key, t1) in [
            (E::FanMalfunction, "fanMalfunction", "Fan Malfunction"),
            (E::CameraMalfunction, "cameraMalfunction", "Camera Malfunction"),
            (E::GpsMalfunction, "gpsMalfunction", "GPS Malfunction"),
            (E::LocalizerMalfunction, "localizerMalfunction", "Sensor Malfunction"),
        ] {
            cat.insert(
                event,
                ET::Permanent,
                b.normal_permanent(
                    tr(&format!("{key}.1"), t1),
                    tr(&format!("{key}.2"), "Contact Support"),
                ),
            );
        }

        for (event, key, text) in [
            (E::ModeChangeOpenpilot, "modeChangeOpenpilot", "Mode: Steering + Cruise"),
            (E::ModeChangeDistcurv, "modeChangeDistcurv", "Mode: Distance + Curve"),
            (E::ModeChangeDistance, "modeChangeDistance", "Mode: Distance Only"),
            (E::ModeChangeCurv, "modeChangeCurv", "Mode: Curve Only"),
            (E::ModeChangeOneway, "modeChangeOneway", "Mode: One-Way Road"),
            (E::ModeChangeMaponly, "modeChangeMaponly", "Mode: Map Only"),
        ] {
            cat.insert(
                event,
                ET::Warning,
                banner(tr(&format!("{key}.1"), text), AudibleAlert::Warning, ms(1000)),
            );
        }

        cat.insert(
            E::NeedBrake,
            ET::Warning,
            b.alert(
                tr("needBrake.1", "Brake!"),
                tr("needBrake.2", "Risk of Collision"),
                AlertStatus::Normal,
                AlertSize::Full,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::PromptRepeat,
                ms(100),
            ),
        );
        cat.insert(
            E::RoutineDriveOn,
            ET::Warning,
            banner(
                tr("routineDriveOn.1", "Routine Drive Mode Active"),
                AudibleAlert::None,
                ms(1000),
            ),
        );

        // ── State transitions ──────────────────────────────────

        cat.insert(E::PcmEnable, ET::Enable, b.engagement(AudibleAlert::Engage));
        cat.insert(E::ButtonEnable, ET::Enable, b.engagement(AudibleAlert::Engage));
        cat.insert(E::PcmDisable, ET::UserDisable, b.engagement(AudibleAlert::Disengage));
        cat.insert(E::ButtonCancel, ET::UserDisable, b.engagement(AudibleAlert::Disengage));

        cat.insert(
            E::BrakeHold,
            ET::Warning,
            b.alert(
                tr("brakeHold.1", "Brake Hold Active"),
                "",
                AlertStatus::Normal,
                AlertSize::Full,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::None,
                ms(1000),
            ),
        );

        cat.insert(E::ParkBrake, ET::UserDisable, b.engagement(AudibleAlert::None));
        cat.insert(
            E::ParkBrake,
            ET::NoEntry,
            no_entry(tr("parkBrake.1", "Parking Brake Engaged")),
        );

        cat.insert(E::PedalPressed, ET::UserDisable, b.engagement(AudibleAlert::None));
        cat.insert(
            E::PedalPressed,
            ET::NoEntry,
            b.no_entry(tr("pedalPressed.1", "Pedal Pressed"), VisualAlert::BrakePressed),
        );

        cat.insert(E::WrongCarMode, ET::UserDisable, b.engagement(AudibleAlert::Disengage));
        cat.insert(
            E::WrongCarMode,
            ET::NoEntry,
            AlertSource::dynamic(
                FactoryId::WrongCarMode,
                [
                    tr("wrongCarMode.1", "Cruise Mode Disabled"),
                    tr("wrongCarMode.2", "Main Switch Off"),
                ],
            ),
        );

        cat.insert(E::WrongCruiseMode, ET::UserDisable, b.engagement(AudibleAlert::None));
        cat.insert(
            E::WrongCruiseMode,
            ET::NoEntry,
            no_entry(tr("wrongCruiseMode.1", "Adaptive Cruise Disabled")),
        );

        cat.insert(
            E::SteerTempUnavailable,
            ET::SoftDisable,
            soft(tr("steerTempUnavailable.1", "Steering Temporarily Unavailable")),
        );
        cat.insert(
            E::SteerTempUnavailable,
            ET::NoEntry,
            no_entry(tr("steerTempUnavailable.2", "Steering Temporarily Unavailable")),
        );

        for (event, key, text, rate) in [
            (E::IsgActive, "isgActive", "ISG Active: Ready to Go", true),
            (E::CamSpeedDown, "camSpeedDown", "Speed Camera Ahead: Slowing Down", true),
            (E::StandstillResButton, "standstillResButton", "Resuming From Standstill", true),
            (E::GapAdjusting, "gapAdjusting", "Adjusting Following Gap", true),
            (E::ResCruise, "resCruise", "Resuming Cruise Speed", false),
            (E::CurvSpeedDown, "curvSpeedDown", "Slowing for Curve", false),
            (E::CutinDetection, "cutinDetection", "Cut-in Vehicle Detected", false),
        ] {
            let duration = if event == E::IsgActive { ms(100) } else { ms(500) };
            let spec = banner(tr(&format!("{key}.1"), text), AudibleAlert::None, duration);
            let spec = if rate { b.repeating(spec, RATE_075) } else { spec };
            cat.insert(event, ET::Warning, spec);
        }

        cat.insert(
            E::OutOfSpace,
            ET::Permanent,
            b.normal_permanent(tr("outOfSpace.1", "Out of Storage"), ""),
        );
        cat.insert(E::OutOfSpace, ET::NoEntry, no_entry(tr("outOfSpace.2", "Out of Storage")));

        cat.insert(
            E::BelowEngageSpeed,
            ET::NoEntry,
            AlertSource::dynamic(FactoryId::BelowEngageSpeed, []),
        );

        cat.insert(
            E::SensorDataInvalid,
            ET::Permanent,
            b.delayed(
                b.normal_permanent(
                    tr("sensorDataInvalid.1", "No Data from Device Sensors"),
                    tr("sensorDataInvalid.2", "Reboot your Device"),
                ),
                ms(1000),
            ),
        );
        cat.insert(
            E::SensorDataInvalid,
            ET::NoEntry,
            no_entry(tr("sensorDataInvalid.3", "No Data from Device Sensors")),
        );

        cat.insert(
            E::NoGps,
            ET::Permanent,
            AlertSource::dynamic(
                FactoryId::NoGps,
                [
                    tr("noGps.1", "Poor GPS reception"),
                    tr("noGps.2", "If sky is visible, contact support"),
                    tr("noGps.3", "Check GPS antenna placement"),
                ],
            ),
        );

        cat.insert(
            E::SoundsUnavailable,
            ET::Permanent,
            b.normal_permanent(
                tr("soundsUnavailable.1", "Speaker not found"),
                tr("soundsUnavailable.2", "Reboot your Device"),
            ),
        );
        cat.insert(
            E::SoundsUnavailable,
            ET::NoEntry,
            no_entry(tr("soundsUnavailable.3", "Speaker not found")),
        );

        cat.insert(
            E::TooDistracted,
            ET::NoEntry,
            no_entry(tr("tooDistracted.1", "Distraction Level Too High")),
        );

        cat.insert(
            E::Overheat,
            ET::Permanent,
            b.normal_permanent(tr("overheat.1", "System Overheated"), ""),
        );
        cat.insert(E::Overheat, ET::SoftDisable, soft(tr("overheat.2", "System Overheated")));
        cat.insert(E::Overheat, ET::NoEntry, no_entry(tr("overheat.3", "System Overheated")));

        cat.insert(E::WrongGear, ET::UserDisable, b.engagement(AudibleAlert::Disengage));
        cat.insert(E::WrongGear, ET::NoEntry, no_entry(tr("wrongGear.1", "Gear not D")));

        cat.insert(
            E::CalibrationInvalid,
            ET::Permanent,
            b.normal_permanent(
                tr("calibrationInvalid.1", "Calibration Invalid"),
                tr("calibrationInvalid.2", "Remount Device and Recalibrate"),
            ),
        );
        cat.insert(
            E::CalibrationInvalid,
            ET::SoftDisable,
            soft(tr("calibrationInvalid.3", "Calibration Invalid: Remount Device & Recalibrate")),
        );
        cat.insert(
            E::CalibrationInvalid,
            ET::NoEntry,
            no_entry(tr("calibrationInvalid.4", "Calibration Invalid: Remount Device & Recalibrate")),
        );

        cat.insert(
            E::CalibrationIncomplete,
            ET::Permanent,
            AlertSource::dynamic(FactoryId::CalibrationIncomplete, []),
        );
        cat.insert(
            E::CalibrationIncomplete,
            ET::SoftDisable,
            soft(tr("calibrationIncomplete.1", "Calibration in Progress")),
        );
        cat.insert(
            E::CalibrationIncomplete,
            ET::NoEntry,
            no_entry(tr("calibrationIncomplete.2", "Calibration in Progress")),
        );

        cat.insert(E::DoorOpen, ET::SoftDisable, user_soft(tr("doorOpen.1", "Door Open")));
        cat.insert(E::DoorOpen, ET::NoEntry, no_entry(tr("doorOpen.2", "Door Open")));

        cat.insert(
            E::SeatbeltNotLatched,
            ET::SoftDisable,
            user_soft(tr("seatbeltNotLatched.1", "Seatbelt Unlatched")),
        );
        cat.insert(
            E::SeatbeltNotLatched,
            ET::NoEntry,
            no_entry(tr("seatbeltNotLatched.2", "Seatbelt Unlatched")),
        );

        // Plain soft-disable + no-entry pairs.
        for (event, key, text) in [
            (E::EspDisabled, "espDisabled", "ESP Off"),
            (E::LowBattery, "lowBattery", "Low Battery"),
            (E::CommIssueAvgFreq, "commIssueAvgFreq", "Low Communication Rate between Processes"),
            (E::RadarFault, "radarFault", "Radar Error: Restart the Car"),
            (E::ModeldLagging, "modeldLagging", "Driving model lagging"),
            (E::PosenetInvalid, "posenetInvalid", "Model Output Uncertain"),
            (E::DeviceFalling, "deviceFalling", "Device Fell Off Mount"),
        ] {
            cat.insert(event, ET::SoftDisable, soft(tr(&format!("{key}.1"), text)));
            cat.insert(event, ET::NoEntry, no_entry(tr(&format!("{key}.2"), text)));
        }

        cat.insert(
            E::CommIssue,
            ET::Warning,
            b.alert(
                tr("commIssue.1", "Communication Issue between Processes"),
                tr("commIssue.2", "Check Device Connections"),
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::None,
                ms(1000),
            ),
        );

        cat.insert(
            E::ProcessNotRunning,
            ET::NoEntry,
            no_entry(tr("processNotRunning.1", "System Malfunction: Reboot Your Device")),
        );

        cat.insert(
            E::LowMemory,
            ET::SoftDisable,
            soft(tr("lowMemory.1", "Low Memory: Reboot Your Device")),
        );
        cat.insert(
            E::LowMemory,
            ET::Permanent,
            b.normal_permanent(
                tr("lowMemory.2", "Low Memory"),
                tr("lowMemory.3", "Reboot your Device"),
            ),
        );
        cat.insert(
            E::LowMemory,
            ET::NoEntry,
            no_entry(tr("lowMemory.4", "Low Memory: Reboot Your Device")),
        );

        cat.insert(
            E::HighCpuUsage,
            ET::NoEntry,
            no_entry(tr("highCpuUsage.1", "System Malfunction: Reboot Your Device")),
        );

        cat.insert(
            E::AccFaulted,
            ET::ImmediateDisable,
            b.immediate_disable(tr("accFaulted.1", "Cruise Faulted")),
        );
        cat.insert(
            E::AccFaulted,
            ET::Permanent,
            b.normal_permanent(tr("accFaulted.2", "Cruise Faulted"), ""),
        );
        cat.insert(E::AccFaulted, ET::NoEntry, no_entry(tr("accFaulted.3", "Cruise Faulted")));

        cat.insert(
            E::ControlsMismatch,
            ET::ImmediateDisable,
            b.immediate_disable(tr("controlsMismatch.1", "Controls Mismatch")),
        );

        for (event, key, text) in [
            (E::RoadCameraError, "roadCameraError", "Camera Error: Road"),
            (E::DriverCameraError, "driverCameraError", "Camera Error: Driver"),
            (E::WideRoadCameraError, "wideRoadCameraError", "Camera Error: Wide Road"),
        ] {
            let spec = b.permanent_with(tr(&format!("{key}.1"), text), "", Priority::Lower, ms(1000));
            cat.insert(event, ET::Permanent, b.delayed(spec, ms(30_000)));
        }

        cat.insert(
            E::UsbError,
            ET::SoftDisable,
            soft(tr("usbError.1", "USB Error: Reboot Your Device")),
        );
        cat.insert(
            E::UsbError,
            ET::Permanent,
            b.normal_permanent(tr("usbError.2", "USB Error: Reboot Your Device"), ""),
        );
        cat.insert(
            E::UsbError,
            ET::NoEntry,
            no_entry(tr("usbError.3", "USB Error: Reboot Your Device")),
        );

        cat.insert(
            E::CanError,
            ET::Permanent,
            AlertSource::dynamic(FactoryId::CanError, []),
        );
        cat.insert(
            E::CanError,
            ET::ImmediateDisable,
            b.immediate_disable(tr("canError.1", "CAN Error: Check Connections")),
        );
        cat.insert(
            E::CanError,
            ET::NoEntry,
            no_entry(tr("canError.2", "CAN Error: Check Connections")),
        );

        for (event, key, fault, permanent) in [
            (
                E::SteerUnavailable,
                "steerUnavailable",
                "LKAS Fault: Restart the Car",
                "LKAS Fault: Restart the car to engage",
            ),
            (
                E::BrakeUnavailable,
                "brakeUnavailable",
                "Cruise Fault: Restart the Car",
                "Cruise Fault: Restart the car to engage",
            ),
        ] {
            cat.insert(
                event,
                ET::ImmediateDisable,
                b.immediate_disable(tr(&format!("{key}.1"), fault)),
            );
            cat.insert(
                event,
                ET::Permanent,
                b.normal_permanent(tr(&format!("{key}.2"), permanent), ""),
            );
            cat.insert(event, ET::NoEntry, no_entry(tr(&format!("{key}.3"), fault)));
        }

        for (event, key, text, category) in [
            (E::ReverseGear, "reverseGear", "Reverse Gear", ET::Permanent),
            (E::GearNotD, "gearNotD", "Gear not D", ET::Warning),
        ] {
            let spec = b.alert(
                tr(&format!("{key}.1"), text),
                "",
                AlertStatus::UserPrompt,
                AlertSize::Full,
                Priority::Lowest,
                VisualAlert::None,
                AudibleAlert::None,
                ms(200),
            );
            cat.insert(event, category, b.delayed(spec, ms(500)));
            cat.insert(event, ET::NoEntry, no_entry(tr(&format!("{key}.2"), text)));
        }

        cat.insert(
            E::CruiseDisabled,
            ET::ImmediateDisable,
            b.immediate_disable(tr("cruiseDisabled.1", "Cruise Is Off")),
        );

        cat.insert(
            E::PlannerError,
            ET::ImmediateDisable,
            b.immediate_disable(tr("plannerError.1", "Planner Solution Error")),
        );
        cat.insert(
            E::PlannerError,
            ET::NoEntry,
            no_entry(tr("plannerError.2", "Planner Solution Error")),
        );

        cat.insert(
            E::RelayMalfunction,
            ET::ImmediateDisable,
            b.immediate_disable(tr("relayMalfunction.1", "Harness Malfunction")),
        );
        cat.insert(
            E::RelayMalfunction,
            ET::Permanent,
            b.normal_permanent(
                tr("relayMalfunction.2", "Harness Malfunction"),
                tr("relayMalfunction.3", "Check Hardware"),
            ),
        );
        cat.insert(
            E::RelayMalfunction,
            ET::NoEntry,
            no_entry(tr("relayMalfunction.4", "Harness Malfunction")),
        );

        let cancelled = |key: &str, reason: &str| {
            b.alert(
                tr(&format!("{key}.1"), "Controls Canceled"),
                tr(&format!("{key}.2"), reason),
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::High,
                VisualAlert::None,
                AudibleAlert::None,
                ms(3000),
            )
        };
        cat.insert(E::NoTarget, ET::ImmediateDisable, cancelled("noTarget", "No close lead car"));
        cat.insert(E::NoTarget, ET::NoEntry, no_entry(tr("noTarget.3", "No Close Lead Car")));
        cat.insert(
            E::SpeedTooLow,
            ET::ImmediateDisable,
            cancelled("speedTooLow", "Speed too low"),
        );

        cat.insert(
            E::SpeedTooHigh,
            ET::Warning,
            b.alert(
                tr("speedTooHigh.1", "Speed Too High"),
                tr("speedTooHigh.2", "Model uncertain at this speed"),
                AlertStatus::UserPrompt,
                AlertSize::Mid,
                Priority::High,
                VisualAlert::SteerRequired,
                AudibleAlert::PromptRepeat,
                ms(4000),
            ),
        );
        cat.insert(
            E::SpeedTooHigh,
            ET::NoEntry,
            no_entry(tr("speedTooHigh.3", "Slow down to engage")),
        );

        cat.insert(
            E::LowSpeedLockout,
            ET::Permanent,
            b.normal_permanent(
                tr("lowSpeedLockout.1", "Cruise Fault: Restart the car to engage"),
                "",
            ),
        );
        cat.insert(
            E::LowSpeedLockout,
            ET::NoEntry,
            no_entry(tr("lowSpeedLockout.2", "Cruise Fault: Restart the Car")),
        );

        cat.insert(
            E::LkasDisabled,
            ET::Warning,
            b.repeating(
                banner(tr("lkasDisabled.1", "LKAS Disabled"), AudibleAlert::Disengage, ms(1000)),
                RATE_05,
            ),
        );
        cat.insert(
            E::LkasEnabled,
            ET::Warning,
            banner(tr("lkasEnabled.1", "LKAS Enabled"), AudibleAlert::Engage, ms(1000)),
        );
        cat.insert(
            E::UnSleepMode,
            ET::Warning,
            banner(tr("unSleepMode.1", "Display Sleep Mode Off"), AudibleAlert::None, ms(2000)),
        );
        cat.insert(
            E::SpeedBump,
            ET::Warning,
            banner(tr("speedBump.1", "Speed Bump Ahead"), AudibleAlert::None, ms(500)),
        );
        cat.insert(
            E::SccDriverOverride,
            ET::Warning,
            banner(
                tr("sccDriverOverride.1", "Driver Cruise Override"),
                AudibleAlert::None,
                ms(500),
            ),
        );
        cat.insert(
            E::DoNotDisturb,
            ET::Warning,
            b.alert(
                tr("doNotDisturb.1", "Do Not Disturb Mode On"),
                tr("doNotDisturb.2", "Screen Off While Driving"),
                AlertStatus::Normal,
                AlertSize::Mid,
                Priority::Low,
                VisualAlert::None,
                AudibleAlert::None,
                ms(5000),
            ),
        );
        cat.insert(
            E::ChimeAtResume,
            ET::Warning,
            banner(tr("chimeAtResume.1", "Lead Car Departed"), AudibleAlert::DingDong, ms(3000)),
        );

        cat
    }
}
