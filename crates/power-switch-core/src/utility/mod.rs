mod power_utility;
mod powercfg;

pub use {
    power_utility::{PowerUtility, UtilityOutput},
    powercfg::{DEFAULT_PROGRAM, Powercfg},
};
