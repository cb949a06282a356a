use anyhow::{anyhow, Result};
use std::collections::HashMap;
use crate::screens::*;

pub struct ScreenFactory;

impl ScreenFactory {
    pub fn create_screen(screen_type: &str) -> Result<Box<dyn Screen>> {
        match screen_type {
            "uptime" => Ok(Box::new(UptimeScreen)),
            "countdown" => Ok(Box::new(CountdownScreen)),
            "overview" => Ok(Box::new(OverviewScreen)),
            _ => Err(anyhow!("Unknown screen type: {}", screen_type)),
        }
    }

    pub fn create_screens(screen_types: &[&str]) -> Result<Vec<Box<dyn Screen>>> {
        screen_types.iter()
            .map(|&screen_type| Self::create_screen(screen_type))
            .collect()
    }

    pub fn get_available_screens() -> Vec<&'static str> {
        vec!["uptime", "countdown", "overview"]
    }

    pub fn get_screen_descriptions() -> HashMap<&'static str, &'static str> {
        let mut descriptions = HashMap::new();
        descriptions.insert("uptime", "Show system uptime and boot time");
        descriptions.insert("countdown", "Show the time left on the countdown timer");
        descriptions.insert("overview", "Hostname, uptime and countdown on one screen");
        descriptions
    }

    pub fn validate_screen_type(screen_type: &str) -> bool {
        Self::get_available_screens().contains(&screen_type)
    }
}
