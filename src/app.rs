use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use anyhow::Context;
use tracing::{debug, info};

use crate::cli::CliParser;
use crate::config::AppConfig;
use crate::countdown::CountdownTimer;
use crate::errors::{AppError, Result};
use crate::screen_manager::ScreenManager;
use crate::screens::ScreenContext;
use crate::display::DisplayManager;
use crate::system_info::{get_hostname, UptimeProbe};

pub struct Application<W: Write = io::Stdout> {
    config: AppConfig,
    display_manager: DisplayManager<W>,
    screen_manager: Option<ScreenManager>,
    countdown: CountdownTimer,
    probe: UptimeProbe,
    hostname: String,
}

impl Application<io::Stdout> {
    pub fn new() -> Result<Self> {
        let config = CliParser::parse()?;
        Ok(Self::with_display(config, DisplayManager::stdout()))
    }
}

impl<W: Write> Application<W> {
    pub fn with_display(config: AppConfig, display_manager: DisplayManager<W>) -> Self {
        let countdown = CountdownTimer::new(config.countdown_secs, config.countdown_repeat);
        let probe = UptimeProbe::new(&config);
        Self {
            config,
            display_manager,
            screen_manager: None,
            countdown,
            probe,
            hostname: get_hostname(),
        }
    }

    pub fn initialize(&mut self) -> Result<()> {
        // Handle clear-only mode
        if self.config.clear_only {
            self.display_manager.clear_display()
                .map_err(|e| AppError::display(&format!("Failed to clear display: {}", e)))?;
            return Ok(());
        }

        // Create screen manager with enabled screens
        let screen_manager = ScreenManager::new(
            self.config.enabled_screens_as_str_refs(),
            self.config.screen_duration_secs,
        ).context("Failed to create screen manager")?;

        info!(
            screens = ?self.config.enabled_screens,
            countdown_secs = self.config.countdown_secs,
            "Display initialized"
        );
        self.screen_manager = Some(screen_manager);

        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        if self.config.clear_only {
            return Ok(());
        }

        if self.config.once {
            return self.render_frame();
        }

        loop {
            self.render_frame()?;

            // Wait for next update
            thread::sleep(Duration::from_secs(self.config.interval_seconds));
        }
    }

    fn screen_context(&mut self) -> ScreenContext {
        ScreenContext {
            uptime_secs: self.probe.resolve(),
            countdown_remaining_secs: self.countdown.remaining_secs(),
            countdown_total_secs: self.countdown.total_secs(),
            hostname: self.hostname.clone(),
        }
    }

    pub fn render_frame(&mut self) -> Result<()> {
        if self.countdown.tick() {
            info!("Countdown finished, restarting");
        }
        let ctx = self.screen_context();

        let screen_manager = self.screen_manager.as_mut()
            .ok_or_else(|| AppError::system_info("Screen manager not initialized"))?;

        // Check if we need to switch screens
        if screen_manager.should_switch_screen() {
            screen_manager.next_screen();
        }

        // Render current screen
        let (title, content) = screen_manager.render_current_screen(&ctx)
            .context("Failed to render screen")?;
        debug!(%title, "Rendering frame");

        self.display_manager.render_content(&title, &content)
            .map_err(|e| AppError::display(&format!("Failed to render to display: {}", e)))?;

        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_display(self) -> DisplayManager<W> {
        self.display_manager
    }
}
