pub(crate) mod agent;
pub(crate) mod arena;
pub(crate) mod error;
pub mod game;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        arena::{Arena, ArenaOptions, Match, Outcome, Reason, Seat, Tally},
        error::{Error, Kind, Result},
        game::*,
    };
}
