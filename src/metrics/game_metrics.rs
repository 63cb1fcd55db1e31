use std::time::{Duration, Instant};

/// Session statistics shown in the status bars
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// Frames counted in the last full second
    pub fps: u32,
    window_start: Instant,
    window_frames: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            fps: 0,
            window_start: now,
            window_frames: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Count a game step; the rate is refreshed once per second
    pub fn on_frame(&mut self) {
        self.record_frame(Instant::now());
    }

    fn record_frame(&mut self, now: Instant) {
        self.window_frames += 1;
        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            self.fps = self.window_frames;
            self.window_frames = 0;
            self.window_start = now;
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
