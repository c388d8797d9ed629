//! Static Colombian holiday tables.
//!
//! Labels carry the Spanish name followed by the English name in parentheses.

use crate::engine::MonthDay;

/// Label reported for every Sunday.
pub const SUNDAY: &str = "Domingo (Sunday)";

/// Holidays observed on their calendar date, whatever the weekday.
pub const FIXED_HOLIDAYS: &[(MonthDay, &str)] = &[
    (MonthDay::new(1, 1), "Año Nuevo (New Year's Day)"),
    (MonthDay::new(5, 1), "Día del Trabajo (Labour Day)"),
    (MonthDay::new(7, 20), "Día de la Independencia (Independence Day)"),
    (MonthDay::new(8, 7), "Batalla de Boyacá (Battle of Boyacá)"),
    (MonthDay::new(12, 8), "Inmaculada Concepción (Immaculate Conception)"),
    (MonthDay::new(12, 25), "Navidad (Christmas Day)"),
];

/// Holidays moved to the following Monday under the Ley Emiliani, keyed by
/// their nominal date.
pub const MOVABLE_TO_MONDAY: &[(MonthDay, &str)] = &[
    (MonthDay::new(1, 6), "Epifanía (Epiphany)"),
    (MonthDay::new(3, 19), "Día de San José (St. Joseph's Day)"),
    (MonthDay::new(6, 29), "San Pedro y San Pablo (St. Peter and St. Paul)"),
    (MonthDay::new(8, 15), "Asunción de la Virgen (Assumption of Mary)"),
    (MonthDay::new(10, 12), "Día de la Raza (Columbus Day)"),
    (MonthDay::new(11, 1), "Todos los Santos (All Saints' Day)"),
    (MonthDay::new(11, 11), "Independencia de Cartagena (Independence of Cartagena)"),
];

/// A holiday defined as an offset from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasterRule {
    /// Days from Easter Sunday; negative for the days before it.
    pub offset_days: i64,
    /// Whether the computed date goes through [`crate::shift::next_monday`].
    pub shift_to_monday: bool,
    pub name: &'static str,
}

/// Easter-relative holidays, in the order they are applied.
///
/// Corpus Christi (+64) and Sacred Heart (+71) already fall on a Monday, so only
/// Ascension carries an explicit shift.
pub const EASTER_RELATIVE: &[EasterRule] = &[
    EasterRule {
        offset_days: -3,
        shift_to_monday: false,
        name: "Jueves Santo (Maundy Thursday)",
    },
    EasterRule {
        offset_days: -2,
        shift_to_monday: false,
        name: "Viernes Santo (Good Friday)",
    },
    EasterRule {
        offset_days: 43,
        shift_to_monday: true,
        name: "Ascensión del Señor (Ascension Day)",
    },
    EasterRule {
        offset_days: 64,
        shift_to_monday: false,
        name: "Corpus Christi",
    },
    EasterRule {
        offset_days: 71,
        shift_to_monday: false,
        name: "Sagrado Corazón (Sacred Heart)",
    },
];
