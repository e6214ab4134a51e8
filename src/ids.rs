//! Event identifiers.
//!
//! [`EventId`] is the stable wire identifier.  [`EventName`] enumerates the
//! events this build knows by name; identifiers outside it stay
//! representable as opaque ids so a peer with a newer catalog can still be
//! relayed.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Stable numeric event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u16);

impl EventId {
    /// Named event for this id, if this build knows it.
    pub fn name(self) -> Option<EventName> {
        EventName::from_id(self)
    }
}

impl From<EventName> for EventId {
    fn from(name: EventName) -> Self {
        name.id()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name.as_str()),
            None => write!(f, "#{}", self.0),
        }
    }
}

// Each entry: Variant = discriminant => "symbol".  Discriminants are wire
// ids and must never be reused.
macro_rules! event_names {
    ($($variant:ident = $id:literal => $sym:literal,)+) => {
        /// Events known to this build.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum EventName {
            $($variant = $id,)+
        }

        impl EventName {
            pub const ALL: &'static [EventName] = &[$(Self::$variant,)+];

            /// camelCase symbol used in catalogs and alert type tags.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $sym,)+
                }
            }

            pub fn from_id(id: EventId) -> Option<Self> {
                match id.0 {
                    $($id => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

event_names! {
    StockFcw = 0 => "stockFcw",
    JoystickDebug = 1 => "joystickDebug",
    ControlsInitializing = 2 => "controlsInitializing",
    Startup = 3 => "startup",
    StartupMaster = 4 => "startupMaster",
    StartupNoControl = 5 => "startupNoControl",
    StartupNoCar = 6 => "startupNoCar",
    StartupNoFw = 7 => "startupNoFw",
    DashcamMode = 8 => "dashcamMode",
    InvalidLkasSetting = 9 => "invalidLkasSetting",
    CruiseMismatch = 10 => "cruiseMismatch",
    CarUnrecognized = 11 => "carUnrecognized",
    StockAeb = 12 => "stockAeb",
    Fcw = 13 => "fcw",
    Ldw = 14 => "ldw",
    GasPressed = 15 => "gasPressed",
    VehicleModelInvalid = 16 => "vehicleModelInvalid",
    SteerTempUnavailableSilent = 17 => "steerTempUnavailableSilent",
    PreDriverDistracted = 18 => "preDriverDistracted",
    PromptDriverDistracted = 19 => "promptDriverDistracted",
    DriverDistracted = 20 => "driverDistracted",
    PreDriverUnresponsive = 21 => "preDriverUnresponsive",
    PromptDriverUnresponsive = 22 => "promptDriverUnresponsive",
    DriverUnresponsive = 23 => "driverUnresponsive",
    ManualRestart = 24 => "manualRestart",
    ResumeRequired = 25 => "resumeRequired",
    BelowSteerSpeed = 26 => "belowSteerSpeed",
    PreLaneChangeLeft = 27 => "preLaneChangeLeft",
    PreLaneChangeRight = 28 => "preLaneChangeRight",
    LaneChangeBlocked = 29 => "laneChangeBlocked",
    LaneChange = 30 => "laneChange",
    E2eLongAlert = 31 => "e2eLongAlert",
    LaneChangeManual = 32 => "laneChangeManual",
    EmgButtonManual = 33 => "emgButtonManual",
    DriverSteering = 34 => "driverSteering",
    SteerSaturated = 35 => "steerSaturated",
    FanMalfunction = 36 => "fanMalfunction",
    CameraMalfunction = 37 => "cameraMalfunction",
    GpsMalfunction = 38 => "gpsMalfunction",
    LocalizerMalfunction = 39 => "localizerMalfunction",
    ModeChangeOpenpilot = 40 => "modeChangeOpenpilot",
    ModeChangeDistcurv = 41 => "modeChangeDistcurv",
    ModeChangeDistance = 42 => "modeChangeDistance",
    ModeChangeCurv = 43 => "modeChangeCurv",
    ModeChangeOneway = 44 => "modeChangeOneway",
    ModeChangeMaponly = 45 => "modeChangeMaponly",
    NeedBrake = 46 => "needBrake",
    RoutineDriveOn = 47 => "routineDriveOn",
    PcmEnable = 48 => "pcmEnable",
    ButtonEnable = 49 => "buttonEnable",
    PcmDisable = 50 => "pcmDisable",
    ButtonCancel = 51 => "buttonCancel",
    BrakeHold = 52 => "brakeHold",
    ParkBrake = 53 => "parkBrake",
    PedalPressed = 54 => "pedalPressed",
    WrongCarMode = 55 => "wrongCarMode",
    WrongCruiseMode = 56 => "wrongCruiseMode",
    SteerTempUnavailable = 57 => "steerTempUnavailable",
    IsgActive = 58 => "isgActive",
    CamSpeedDown = 59 => "camSpeedDown",
    StandstillResButton = 60 => "standstillResButton",
    GapAdjusting = 61 => "gapAdjusting",
    ResCruise = 62 => "resCruise",
    CurvSpeedDown = 63 => "curvSpeedDown",
    CutinDetection = 64 => "cutinDetection",
    OutOfSpace = 65 => "outOfSpace",
    BelowEngageSpeed = 66 => "belowEngageSpeed",
    SensorDataInvalid = 67 => "sensorDataInvalid",
    NoGps = 68 => "noGps",
    SoundsUnavailable = 69 => "soundsUnavailable",
    TooDistracted = 70 => "tooDistracted",
    Overheat = 71 => "overheat",
    WrongGear = 72 => "wrongGear",
    CalibrationInvalid = 73 => "calibrationInvalid",
    CalibrationIncomplete = 74 => "calibrationIncomplete",
    DoorOpen = 75 => "doorOpen",
    SeatbeltNotLatched = 76 => "seatbeltNotLatched",
    EspDisabled = 77 => "espDisabled",
    LowBattery = 78 => "lowBattery",
    CommIssue = 79 => "commIssue",
    CommIssueAvgFreq = 80 => "commIssueAvgFreq",
    ProcessNotRunning = 81 => "processNotRunning",
    RadarFault = 82 => "radarFault",
    ModeldLagging = 83 => "modeldLagging",
    PosenetInvalid = 84 => "posenetInvalid",
    DeviceFalling = 85 => "deviceFalling",
    LowMemory = 86 => "lowMemory",
    HighCpuUsage = 87 => "highCpuUsage",
    AccFaulted = 88 => "accFaulted",
    ControlsMismatch = 89 => "controlsMismatch",
    RoadCameraError = 90 => "roadCameraError",
    DriverCameraError = 91 => "driverCameraError",
    WideRoadCameraError = 92 => "wideRoadCameraError",
    UsbError = 93 => "usbError",
    CanError = 94 => "canError",
    SteerUnavailable = 95 => "steerUnavailable",
    BrakeUnavailable = 96 => "brakeUnavailable",
    ReverseGear = 97 => "reverseGear",
    GearNotD = 98 => "gearNotD",
    CruiseDisabled = 99 => "cruiseDisabled",
    PlannerError = 100 => "plannerError",
    RelayMalfunction = 101 => "relayMalfunction",
    NoTarget = 102 => "noTarget",
    SpeedTooLow = 103 => "speedTooLow",
    SpeedTooHigh = 104 => "speedTooHigh",
    LowSpeedLockout = 105 => "lowSpeedLockout",
    LkasDisabled = 106 => "lkasDisabled",
    LkasEnabled = 107 => "lkasEnabled",
    UnSleepMode = 108 => "unSleepMode",
    SpeedBump = 109 => "speedBump",
    SccDriverOverride = 110 => "sccDriverOverride",
    DoNotDisturb = 111 => "doNotDisturb",
    ChimeAtResume = 112 => "chimeAtResume",
}

impl EventName {
    pub const fn id(self) -> EventId {
        EventId(self as u16)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
