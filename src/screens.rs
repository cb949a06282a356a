use anyhow::Result;
use crate::format::{format_countdown, format_uptime};
use crate::system_info::boot_time_label;

// Values gathered once per refresh and shared by every screen
#[derive(Debug, Clone)]
pub struct ScreenContext {
    pub uptime_secs: Option<f64>,
    pub countdown_remaining_secs: f64,
    pub countdown_total_secs: u64,
    pub hostname: String,
}

impl ScreenContext {
    // Unavailable uptime is shown as such, never as zero
    fn uptime_text(&self) -> String {
        match self.uptime_secs {
            Some(secs) => format_uptime(Some(secs)),
            None => "N/A".to_string(),
        }
    }

    fn countdown_text(&self) -> String {
        format_countdown(Some(self.countdown_remaining_secs))
    }
}

// Screen trait for modular display screens
pub trait Screen {
    fn name(&self) -> &'static str;
    fn title(&self, _ctx: &ScreenContext) -> Result<String> {
        Ok(self.name().to_string())
    }
    fn render(&self, ctx: &ScreenContext) -> Result<String>;
}

// Uptime screen
pub struct UptimeScreen;

impl Screen for UptimeScreen {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn title(&self, _ctx: &ScreenContext) -> Result<String> {
        Ok("Uptime".to_string())
    }

    fn render(&self, ctx: &ScreenContext) -> Result<String> {
        Ok(format!(
            "Up: {}\nSince: {}",
            ctx.uptime_text(),
            boot_time_label(ctx.uptime_secs)
        ))
    }
}

// Countdown timer screen
pub struct CountdownScreen;

impl Screen for CountdownScreen {
    fn name(&self) -> &'static str {
        "countdown"
    }

    fn title(&self, _ctx: &ScreenContext) -> Result<String> {
        Ok("Countdown".to_string())
    }

    fn render(&self, ctx: &ScreenContext) -> Result<String> {
        Ok(format!(
            "Left: {}\nOf: {}",
            ctx.countdown_text(),
            format_countdown(Some(ctx.countdown_total_secs as f64))
        ))
    }
}

// Combined overview screen
pub struct OverviewScreen;

impl Screen for OverviewScreen {
    fn name(&self) -> &'static str {
        "overview"
    }

    fn title(&self, ctx: &ScreenContext) -> Result<String> {
        // Use hostname as title for overview screen
        Ok(ctx.hostname.clone())
    }

    fn render(&self, ctx: &ScreenContext) -> Result<String> {
        Ok(format!(
            "Up: {}\nNext: {}",
            ctx.uptime_text(),
            ctx.countdown_text()
        ))
    }
}
