pub mod aggregate;

pub use aggregate::{Fight, FightLocation, Team};
