//! Skycycle - day/night lighting control and procedural sky texture authoring

pub mod core;
pub mod daynight;
pub mod profile;
pub mod texgen;
