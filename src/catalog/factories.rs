//! Dynamic alert factories and their dispatch table.
//!
//! Some alerts depend on runtime state (current speed limits, calibration
//! progress, board type).  The catalog refers to them by [`FactoryId`];
//! the id indexes a fixed table of plain `fn` pointers, so dispatch is an
//! array lookup with no runtime type inspection.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  FACTORY_TABLE                                            │
//! │  ┌────────────────────────┬───────┬────────────────────┐  │
//! │  │ FactoryId              │ arity │ build              │  │
//! │  ├────────────────────────┼───────┼────────────────────┤  │
//! │  │ SoftDisable            │ 1     │ fn(ctx, args)      │  │
//! │  │ UserSoftDisable        │ 1     │ fn(ctx, args)      │  │
//! │  │ ...                    │       │                    │  │
//! │  └────────────────────────┴───────┴────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```

use core::fmt;

use crate::alert::builder::ms;
use crate::alert::{
    AlertBuilder, AlertSize, AlertSpec, AlertStatus, AudibleAlert, Priority, VisualAlert,
};
use crate::error::FactoryError;
use crate::snapshot::{CanFaultKind, FactoryArgs};

/// m/s → km/h
const MS_TO_KPH: f32 = 3.6;
/// m/s → mph
const MS_TO_MPH: f32 = 2.236_936_3;
/// Calibration only integrates samples above this speed (15 mph, m/s).
pub const CALIBRATION_MIN_SPEED: f32 = 15.0 * 0.447_04;
/// Continuous assertion required before the calibration progress notice.
pub const CALIBRATION_NOTICE_DELAY: core::time::Duration = ms(300_000);

// ---------------------------------------------------------------------------
// Factory identity
// ---------------------------------------------------------------------------

/// Every dynamic alert this build can produce.
/// Must stay in sync with [`FACTORY_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FactoryId {
    SoftDisable = 0,
    UserSoftDisable = 1,
    BelowEngageSpeed = 2,
    BelowSteerSpeed = 3,
    CalibrationIncomplete = 4,
    NoGps = 5,
    WrongCarMode = 6,
    Joystick = 7,
    CanError = 8,
}

impl FactoryId {
    /// Total number of factories; sizes the table array.
    pub const COUNT: usize = 9;

    pub fn descriptor(self) -> &'static FactoryDescriptor {
        &FACTORY_TABLE[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.descriptor().name
    }

    /// Bound text arguments the factory expects.
    pub fn arity(self) -> usize {
        self.descriptor().arity
    }

    pub fn from_name(name: &str) -> Option<Self> {
        FACTORY_TABLE.iter().find(|d| d.name == name).map(|d| d.id)
    }
}

impl fmt::Display for FactoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Everything a factory may read besides [`FactoryArgs`]: the shorthand
/// builder, its bound text arguments, and the soft-disable escalation
/// threshold.  All fixed at catalog load.
pub struct FactoryContext<'a> {
    pub factory: FactoryId,
    pub builder: &'a AlertBuilder,
    pub bound: &'a [String],
    /// Countdowns shorter than this escalate to immediate disable (cycles).
    pub escalate_below: u32,
}

impl FactoryContext<'_> {
    fn arg(&self, index: usize) -> Result<&str, FactoryError> {
        self.bound
            .get(index)
            .map(String::as_str)
            .ok_or(FactoryError::MissingArgument {
                factory: self.factory,
                index,
            })
    }

    fn missing(&self, field: &'static str) -> FactoryError {
        FactoryError::MissingField {
            factory: self.factory,
            field,
        }
    }
}

/// Signature shared by all factories.
pub type AlertFactoryFn =
    fn(&FactoryContext<'_>, &FactoryArgs<'_>) -> Result<AlertSpec, FactoryError>;

/// One row in the dispatch table.
pub struct FactoryDescriptor {
    pub id: FactoryId,
    pub name: &'static str,
    pub arity: usize,
    pub build: AlertFactoryFn,
}

/// Indexed by `FactoryId as usize`.
pub static FACTORY_TABLE: [FactoryDescriptor; FactoryId::COUNT] = [
    FactoryDescriptor {
        id: FactoryId::SoftDisable,
        name: "softDisable",
        arity: 1,
        build: soft_disable,
    },
    FactoryDescriptor {
        id: FactoryId::UserSoftDisable,
        name: "userSoftDisable",
        arity: 1,
        build: user_soft_disable,
    },
    FactoryDescriptor {
        id: FactoryId::BelowEngageSpeed,
        name: "belowEngageSpeed",
        arity: 0,
        build: below_engage_speed,
    },
    FactoryDescriptor {
        id: FactoryId::BelowSteerSpeed,
        name: "belowSteerSpeed",
        arity: 0,
        build: below_steer_speed,
    },
    FactoryDescriptor {
        id: FactoryId::CalibrationIncomplete,
        name: "calibrationIncomplete",
        arity: 0,
        build: calibration_incomplete,
    },
    FactoryDescriptor {
        id: FactoryId::NoGps,
        name: "noGps",
        arity: 3,
        build: no_gps,
    },
    FactoryDescriptor {
        id: FactoryId::WrongCarMode,
        name: "wrongCarMode",
        arity: 2,
        build: wrong_car_mode,
    },
    FactoryDescriptor {
        id: FactoryId::Joystick,
        name: "joystick",
        arity: 0,
        build: joystick,
    },
    FactoryDescriptor {
        id: FactoryId::CanError,
        name: "canError",
        arity: 0,
        build: can_error,
    },
];

/// Run the factory named in `ctx`.
pub fn dispatch(ctx: &FactoryContext<'_>, args: &FactoryArgs<'_>) -> Result<AlertSpec, FactoryError> {
    (ctx.factory.descriptor().build)(ctx, args)
}

// ═══════════════════════════════════════════════════════════════
//  Factories
// ═══════════════════════════════════════════════════════════════

/// Speed rounded to whole display units.
pub fn display_speed(speed_ms: f32, metric: bool) -> String {
    if metric {
        format!("{} km/h", (speed_ms * MS_TO_KPH).round() as i32)
    } else {
        format!("{} mph", (speed_ms * MS_TO_MPH).round() as i32)
    }
}

fn soft_disable(ctx: &FactoryContext<'_>, args: &FactoryArgs<'_>) -> Result<AlertSpec, FactoryError> {
    let text = ctx.arg(0)?;
    if args.soft_disable_cycles < ctx.escalate_below {
        return Ok(ctx.builder.immediate_disable(text));
    }
    Ok(ctx.builder.soft_disable(text))
}

fn user_soft_disable(
    ctx: &FactoryContext<'_>,
    args: &FactoryArgs<'_>,
) -> Result<AlertSpec, FactoryError> {
    let text = ctx.arg(0)?;
    if args.soft_disable_cycles < ctx.escalate_below {
        return Ok(ctx.builder.immediate_disable(text));
    }
    Ok(ctx.builder.user_soft_disable(text))
}

fn below_engage_speed(
    ctx: &FactoryContext<'_>,
    args: &FactoryArgs<'_>,
) -> Result<AlertSpec, FactoryError> {
    let speed = display_speed(args.car.min_enable_speed, args.metric);
    Ok(ctx
        .builder
        .no_entry(format!("Speed Below {speed}"), VisualAlert::None))
}

fn below_steer_speed(
    ctx: &FactoryContext<'_>,
    args: &FactoryArgs<'_>,
) -> Result<AlertSpec, FactoryError> {
    let speed = display_speed(args.car.min_steer_speed, args.metric);
    Ok(ctx.builder.alert(
        format!("Steer Unavailable Below {speed}"),
        "",
        AlertStatus::UserPrompt,
        AlertSize::Small,
        Priority::Mid,
        VisualAlert::None,
        AudibleAlert::Prompt,
        ms(400),
    ))
}

fn calibration_incomplete(
    ctx: &FactoryContext<'_>,
    args: &FactoryArgs<'_>,
) -> Result<AlertSpec, FactoryError> {
    let pct = args
        .state
        .calibration_percent
        .ok_or_else(|| ctx.missing("liveCalibration"))?;
    let spec = ctx.builder.alert(
        format!("Calibration in Progress: {pct}%"),
        format!(
            "Drive Above {}",
            display_speed(CALIBRATION_MIN_SPEED, args.metric)
        ),
        AlertStatus::Normal,
        AlertSize::Mid,
        Priority::Lowest,
        VisualAlert::None,
        AudibleAlert::None,
        ms(200),
    );
    Ok(ctx.builder.delayed(spec, CALIBRATION_NOTICE_DELAY))
}

fn no_gps(ctx: &FactoryContext<'_>, args: &FactoryArgs<'_>) -> Result<AlertSpec, FactoryError> {
    let panda = args
        .state
        .panda_type
        .ok_or_else(|| ctx.missing("peripheralState"))?;
    let hint = if panda.has_integrated_gps() {
        ctx.arg(1)?
    } else {
        ctx.arg(2)?
    };
    let spec = ctx.builder.alert(
        ctx.arg(0)?,
        hint,
        AlertStatus::Normal,
        AlertSize::Mid,
        Priority::Lower,
        VisualAlert::None,
        AudibleAlert::None,
        ms(200),
    );
    Ok(ctx.builder.delayed(spec, ms(300_000)))
}

fn wrong_car_mode(
    ctx: &FactoryContext<'_>,
    args: &FactoryArgs<'_>,
) -> Result<AlertSpec, FactoryError> {
    let text = if args.car.car_name == "honda" {
        ctx.arg(1)?
    } else {
        ctx.arg(0)?
    };
    Ok(ctx.builder.no_entry(text, VisualAlert::None))
}

fn joystick(ctx: &FactoryContext<'_>, args: &FactoryArgs<'_>) -> Result<AlertSpec, FactoryError> {
    let axes = args
        .state
        .joystick_axes
        .as_deref()
        .ok_or_else(|| ctx.missing("testJoystick"))?;
    let (gas, steer) = match axes {
        [gas, steer, ..] => (*gas, *steer),
        [gas] => (*gas, 0.0),
        [] => (0.0, 0.0),
    };
    let vals = format!(
        "Gas: {}%, Steer: {}%",
        (gas * 100.0).round() as i32,
        (steer * 100.0).round() as i32
    );
    Ok(ctx.builder.normal_permanent("Joystick Mode", vals))
}

fn can_error(ctx: &FactoryContext<'_>, args: &FactoryArgs<'_>) -> Result<AlertSpec, FactoryError> {
    let text1 = match args.state.can_fault {
        Some(fault) => {
            let what = match fault.kind {
                CanFaultKind::Missing => "Missing",
                CanFaultKind::Timeout => "Timed Out",
            };
            format!(
                "CAN Error: {:#X} {what}\nDecimal: {}",
                fault.address, fault.address
            )
        }
        None => "CAN Error: Check Connections".to_owned(),
    };
    let spec = ctx.builder.alert(
        text1,
        "",
        AlertStatus::Normal,
        AlertSize::Small,
        Priority::Low,
        VisualAlert::None,
        AudibleAlert::None,
        ms(200),
    );
    Ok(ctx.builder.delayed(spec, ms(1000)))
}
