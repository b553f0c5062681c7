//! Style system with compile-time known style variants
//!
//! All styles are stored in an enum to avoid dynamic dispatch.
//! Each style implements the `Style` trait and owns its own cursor state,
//! so switching styles never leaks one style's bookkeeping into another.

mod blink;
mod chase;
mod chew;
mod chomp;
mod fill;
mod noise;
mod static_fill;

pub use blink::BlinkStyle;
pub use chase::ChaseStyle;
pub use chew::ChewStyle;
pub use chomp::{ChompEmptyStyle, ChompStyle};
pub use fill::{EmptyStyle, FillEmptyStyle, FillStyle};
pub use noise::RandomStyle;
pub use static_fill::StaticStyle;

use crate::bounds::LightFrame;
use crate::random::RandomSource;

const STYLE_NAME_OFF: &str = "off";
const STYLE_NAME_SOLID: &str = "solid";
const STYLE_NAME_BLINK: &str = "blink";
const STYLE_NAME_RANDOM: &str = "random";
const STYLE_NAME_CHASE: &str = "chase";
const STYLE_NAME_FILL: &str = "fill";
const STYLE_NAME_EMPTY: &str = "empty";
const STYLE_NAME_FILL_EMPTY: &str = "fill_empty";
const STYLE_NAME_RANDOM_FILL_EMPTY: &str = "random_fill_empty";
const STYLE_NAME_CHEW: &str = "chew";
const STYLE_NAME_CHOMP: &str = "chomp";
const STYLE_NAME_CHOMP_EMPTY: &str = "chomp_empty";
const STYLE_NAME_RESERVED: &str = "reserved";

const STYLE_ID_OFF: u8 = 0;
const STYLE_ID_SOLID: u8 = 1;
const STYLE_ID_BLINK: u8 = 2;
const STYLE_ID_RANDOM: u8 = 3;
const STYLE_ID_CHASE: u8 = 4;
const STYLE_ID_FILL: u8 = 5;
const STYLE_ID_EMPTY: u8 = 6;
const STYLE_ID_FILL_EMPTY: u8 = 7;
const STYLE_ID_RANDOM_FILL_EMPTY: u8 = 8;
const STYLE_ID_CHEW: u8 = 9;
const STYLE_ID_CHOMP: u8 = 10;
const STYLE_ID_CHOMP_EMPTY: u8 = 11;
const STYLE_ID_RESERVED: u8 = 12;

/// Result of a single style tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The style returned to its starting condition
    pub cycle_completed: bool,
    /// The style is static and the engine should stop ticking
    pub halt: bool,
}

impl TickOutcome {
    /// Mid-cycle tick
    pub const CONTINUE: Self = Self {
        cycle_completed: false,
        halt: false,
    };

    /// Tick that completed a cycle
    pub const CYCLE: Self = Self {
        cycle_completed: true,
        halt: false,
    };

    /// Tick after which nothing will change
    pub const HALT: Self = Self {
        cycle_completed: false,
        halt: true,
    };
}

/// Sweep direction of bidirectional styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SweepDirection {
    /// Lights are turning on
    #[default]
    Forward,
    /// Lights are turning off
    Backward,
}

pub trait Style {
    /// Advance the animation by one step
    fn tick<R: RandomSource>(&mut self, frame: &mut LightFrame<'_>, rng: &mut R) -> TickOutcome;

    /// Return the cursor to the start of a cycle
    fn reset(&mut self);
}

/// Style slot - enum containing all possible styles
#[derive(Debug, Clone)]
pub enum StyleSlot {
    /// All lights off, then stop
    Off(StaticStyle),
    /// All lights on, then stop
    Solid(StaticStyle),
    /// Whole range toggling on and off
    Blink(BlinkStyle),
    /// Every light randomized each tick
    Random(RandomStyle),
    /// Single light sweeping forward with wraparound
    Chase(ChaseStyle),
    /// Lights turning on from the start of the range
    Fill(FillStyle),
    /// Lights turning off from the end of the range
    Empty(EmptyStyle),
    /// Fill up, then empty back down
    FillEmpty(FillEmptyStyle),
    /// Fill up to a random span, then empty back down
    RandomFillEmpty(FillEmptyStyle),
    /// Two sparks meeting in the middle
    Chew(ChewStyle),
    /// Pairs closing in from both ends
    Chomp(ChompStyle),
    /// Pairs closing in, then opening back out
    ChompEmpty(ChompEmptyStyle),
    /// Reserved or unrecognized style, ticks without changing anything
    Inert,
}

/// Known style ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum StyleId {
    Off = STYLE_ID_OFF,
    Solid = STYLE_ID_SOLID,
    Blink = STYLE_ID_BLINK,
    Random = STYLE_ID_RANDOM,
    Chase = STYLE_ID_CHASE,
    Fill = STYLE_ID_FILL,
    Empty = STYLE_ID_EMPTY,
    FillEmpty = STYLE_ID_FILL_EMPTY,
    RandomFillEmpty = STYLE_ID_RANDOM_FILL_EMPTY,
    Chew = STYLE_ID_CHEW,
    Chomp = STYLE_ID_CHOMP,
    ChompEmpty = STYLE_ID_CHOMP_EMPTY,
    Reserved = STYLE_ID_RESERVED,
}

impl StyleId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            STYLE_ID_OFF => Self::Off,
            STYLE_ID_SOLID => Self::Solid,
            STYLE_ID_BLINK => Self::Blink,
            STYLE_ID_RANDOM => Self::Random,
            STYLE_ID_CHASE => Self::Chase,
            STYLE_ID_FILL => Self::Fill,
            STYLE_ID_EMPTY => Self::Empty,
            STYLE_ID_FILL_EMPTY => Self::FillEmpty,
            STYLE_ID_RANDOM_FILL_EMPTY => Self::RandomFillEmpty,
            STYLE_ID_CHEW => Self::Chew,
            STYLE_ID_CHOMP => Self::Chomp,
            STYLE_ID_CHOMP_EMPTY => Self::ChompEmpty,
            STYLE_ID_RESERVED => Self::Reserved,
            _ => return None,
        })
    }

    /// Raw numeric tag of the style
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub fn to_slot(self) -> StyleSlot {
        match self {
            Self::Off => StyleSlot::Off(StaticStyle::off()),
            Self::Solid => StyleSlot::Solid(StaticStyle::solid()),
            Self::Blink => StyleSlot::Blink(BlinkStyle::default()),
            Self::Random => StyleSlot::Random(RandomStyle),
            Self::Chase => StyleSlot::Chase(ChaseStyle::default()),
            Self::Fill => StyleSlot::Fill(FillStyle::default()),
            Self::Empty => StyleSlot::Empty(EmptyStyle::default()),
            Self::FillEmpty => StyleSlot::FillEmpty(FillEmptyStyle::new()),
            Self::RandomFillEmpty => StyleSlot::RandomFillEmpty(FillEmptyStyle::randomized()),
            Self::Chew => StyleSlot::Chew(ChewStyle::default()),
            Self::Chomp => StyleSlot::Chomp(ChompStyle::default()),
            Self::ChompEmpty => StyleSlot::ChompEmpty(ChompEmptyStyle::default()),
            Self::Reserved => StyleSlot::Inert,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => STYLE_NAME_OFF,
            Self::Solid => STYLE_NAME_SOLID,
            Self::Blink => STYLE_NAME_BLINK,
            Self::Random => STYLE_NAME_RANDOM,
            Self::Chase => STYLE_NAME_CHASE,
            Self::Fill => STYLE_NAME_FILL,
            Self::Empty => STYLE_NAME_EMPTY,
            Self::FillEmpty => STYLE_NAME_FILL_EMPTY,
            Self::RandomFillEmpty => STYLE_NAME_RANDOM_FILL_EMPTY,
            Self::Chew => STYLE_NAME_CHEW,
            Self::Chomp => STYLE_NAME_CHOMP,
            Self::ChompEmpty => STYLE_NAME_CHOMP_EMPTY,
            Self::Reserved => STYLE_NAME_RESERVED,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            STYLE_NAME_OFF => Some(Self::Off),
            STYLE_NAME_SOLID => Some(Self::Solid),
            STYLE_NAME_BLINK => Some(Self::Blink),
            STYLE_NAME_RANDOM => Some(Self::Random),
            STYLE_NAME_CHASE => Some(Self::Chase),
            STYLE_NAME_FILL => Some(Self::Fill),
            STYLE_NAME_EMPTY => Some(Self::Empty),
            STYLE_NAME_FILL_EMPTY => Some(Self::FillEmpty),
            STYLE_NAME_RANDOM_FILL_EMPTY => Some(Self::RandomFillEmpty),
            STYLE_NAME_CHEW => Some(Self::Chew),
            STYLE_NAME_CHOMP => Some(Self::Chomp),
            STYLE_NAME_CHOMP_EMPTY => Some(Self::ChompEmpty),
            STYLE_NAME_RESERVED => Some(Self::Reserved),
            _ => None,
        }
    }
}

impl StyleSlot {
    /// Build the slot for a raw style value
    ///
    /// Unrecognized values map to [`StyleSlot::Inert`].
    pub fn from_raw(value: u8) -> Self {
        StyleId::from_raw(value).map_or(Self::Inert, StyleId::to_slot)
    }

    /// Run one tick of the current style
    pub fn tick<R: RandomSource>(
        &mut self,
        frame: &mut LightFrame<'_>,
        rng: &mut R,
    ) -> TickOutcome {
        match self {
            Self::Off(style) | Self::Solid(style) => style.tick(frame, rng),
            Self::Blink(style) => style.tick(frame, rng),
            Self::Random(style) => style.tick(frame, rng),
            Self::Chase(style) => style.tick(frame, rng),
            Self::Fill(style) => style.tick(frame, rng),
            Self::Empty(style) => style.tick(frame, rng),
            Self::FillEmpty(style) | Self::RandomFillEmpty(style) => style.tick(frame, rng),
            Self::Chew(style) => style.tick(frame, rng),
            Self::Chomp(style) => style.tick(frame, rng),
            Self::ChompEmpty(style) => style.tick(frame, rng),
            Self::Inert => TickOutcome::CONTINUE,
        }
    }

    /// Reset the style state
    pub fn reset(&mut self) {
        match self {
            Self::Off(style) | Self::Solid(style) => Style::reset(style),
            Self::Blink(style) => Style::reset(style),
            Self::Random(style) => Style::reset(style),
            Self::Chase(style) => Style::reset(style),
            Self::Fill(style) => Style::reset(style),
            Self::Empty(style) => Style::reset(style),
            Self::FillEmpty(style) | Self::RandomFillEmpty(style) => Style::reset(style),
            Self::Chew(style) => Style::reset(style),
            Self::Chomp(style) => Style::reset(style),
            Self::ChompEmpty(style) => Style::reset(style),
            Self::Inert => {}
        }
    }

    /// Get the style ID for external observation
    ///
    /// Returns `None` for the inert slot, which covers both the reserved id
    /// and unrecognized values.
    pub fn id(&self) -> Option<StyleId> {
        Some(match self {
            Self::Off(_) => StyleId::Off,
            Self::Solid(_) => StyleId::Solid,
            Self::Blink(_) => StyleId::Blink,
            Self::Random(_) => StyleId::Random,
            Self::Chase(_) => StyleId::Chase,
            Self::Fill(_) => StyleId::Fill,
            Self::Empty(_) => StyleId::Empty,
            Self::FillEmpty(_) => StyleId::FillEmpty,
            Self::RandomFillEmpty(_) => StyleId::RandomFillEmpty,
            Self::Chew(_) => StyleId::Chew,
            Self::Chomp(_) => StyleId::Chomp,
            Self::ChompEmpty(_) => StyleId::ChompEmpty,
            Self::Inert => return None,
        })
    }

    /// Check if the style stops the engine after its first tick
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Off(_) | Self::Solid(_))
    }
}
