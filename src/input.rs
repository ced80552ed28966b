//! Device-independent input and the camera mutations it drives.

use std::collections::HashSet;

use crate::frame::FrameContext;
use crate::units::Distance;

/// Keys that act while held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    /// Modifier: Increase/Decrease step the f-number
    AdjustAperture,
    /// Modifier: Increase/Decrease double or halve the exposure time
    AdjustExposure,
    /// Modifier: Increase/Decrease double or halve the ISO
    AdjustIso,
}

/// Discrete presses, applied once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleSeeAll,
    ToggleOrbits,
    ResetSpeed,
    LightYearSpeed,
    Increase,
    Decrease,
}

/// Everything the input layer gathered since the previous frame
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    /// Pointer motion in pixels, +x right and +y down
    pub pointer_delta: (f64, f64),
    pub held: HashSet<Action>,
    pub scroll: f64,
    /// Scroll zooms the lens instead of changing speed
    pub zoom: bool,
    pub commands: Vec<Command>,
}

impl InputFrame {
    pub fn holding(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}

pub const RESET_SPEED_MM: i64 = 300;
pub const MIN_SPEED_MM: i64 = 2;
const SPEED_STEP: f64 = 1.5;
const ZOOM_STEP: f64 = 1.1;
const F_NUMBER_STEP: f64 = 0.1;

impl FrameContext {
    /// Apply one frame of input.
    ///
    /// Order: scroll and commands, speed clamp, projection refresh, pointer
    /// look, then translation by `speed * dt` along the camera basis.
    pub fn apply_input(&mut self, input: &InputFrame) {
        if input.scroll != 0.0 {
            self.apply_scroll(input.scroll, input.zoom);
        }

        for command in &input.commands {
            self.apply_command(*command, input);
        }

        if self.speed < Distance::from_mm(MIN_SPEED_MM) {
            self.speed = Distance::from_mm(MIN_SPEED_MM);
        }

        self.camera.update_projection();

        let (dx, dy) = input.pointer_delta;
        if dx != 0.0 || dy != 0.0 {
            let rate = self.config.pointer_sensitivity * self.camera.fov_rad();
            self.camera
                .rotate(dx.to_radians() * rate, -dy.to_radians() * rate);
        }

        let step = self.speed * self.config.dt();
        let moves = [
            (Action::Forward, self.camera.forward()),
            (Action::Backward, -self.camera.forward()),
            (Action::Right, self.camera.right()),
            (Action::Left, -self.camera.right()),
            (Action::Up, self.camera.up()),
            (Action::Down, -self.camera.up()),
        ];
        for (action, direction) in moves {
            if input.is_held(action) {
                self.camera.translate(&direction, step);
            }
        }
    }

    fn apply_scroll(&mut self, scroll: f64, zoom: bool) {
        let grow = scroll > 0.0;
        if zoom {
            let optics = &mut self.camera.optics;
            if grow {
                optics.focal_length_mm *= ZOOM_STEP;
            } else {
                optics.focal_length_mm /= ZOOM_STEP;
            }
            tracing::debug!("focal length {:.1} mm", optics.focal_length_mm);
        } else if grow {
            self.speed *= SPEED_STEP;
        } else {
            self.speed /= SPEED_STEP;
        }
    }

    fn apply_command(&mut self, command: Command, input: &InputFrame) {
        let optics = &mut self.camera.optics;
        match command {
            Command::ToggleSeeAll => {
                self.see_all = !self.see_all;
                tracing::debug!("see-all {}", self.see_all);
            }
            Command::ToggleOrbits => self.orbit_lines = !self.orbit_lines,
            Command::ResetSpeed => self.speed = Distance::from_mm(RESET_SPEED_MM),
            Command::LightYearSpeed => self.speed = Distance::from_ly(1.0),
            Command::Increase | Command::Decrease => {
                let up = command == Command::Increase;
                if input.is_held(Action::AdjustAperture) {
                    optics.f_number += if up { F_NUMBER_STEP } else { -F_NUMBER_STEP };
                }
                if input.is_held(Action::AdjustExposure) {
                    optics.exposure_s = if up {
                        optics.exposure_s * 2.0
                    } else {
                        optics.exposure_s / 2.0
                    };
                }
                if input.is_held(Action::AdjustIso) {
                    optics.iso = if up { optics.iso * 2.0 } else { optics.iso / 2.0 };
                }
                tracing::debug!(
                    "exposure f/{:.1} {:.3}s ISO {:.0}",
                    optics.f_number,
                    optics.exposure_s,
                    optics.iso
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use std::f64::consts::PI;

    fn context() -> FrameContext {
        FrameContext::new(RenderConfig::default())
    }

    #[test]
    fn test_scroll_changes_speed() {
        let mut ctx = context();
        ctx.apply_input(&InputFrame {
            scroll: 1.0,
            ..Default::default()
        });
        assert_eq!(ctx.speed.as_mm(), 450);
        ctx.apply_input(&InputFrame {
            scroll: -1.0,
            ..Default::default()
        });
        assert_eq!(ctx.speed.as_mm(), 300);
    }

    #[test]
    fn test_speed_floor() {
        let mut ctx = context();
        for _ in 0..50 {
            ctx.apply_input(&InputFrame {
                scroll: -1.0,
                ..Default::default()
            });
        }
        assert_eq!(ctx.speed.as_mm(), MIN_SPEED_MM);
    }

    #[test]
    fn test_zoom_scroll() {
        let mut ctx = context();
        let d0 = ctx.camera.projection_distance();
        ctx.apply_input(&InputFrame {
            scroll: 2.0,
            zoom: true,
            ..Default::default()
        });
        assert!((ctx.camera.optics.focal_length_mm - 8.8).abs() < 1e-12);
        assert!(ctx.camera.projection_distance() > d0);
        assert_eq!(ctx.speed.as_mm(), 300);
    }

    #[test]
    fn test_commands() {
        let mut ctx = context();
        let input = InputFrame::default()
            .with_command(Command::ToggleSeeAll)
            .with_command(Command::ToggleOrbits)
            .with_command(Command::LightYearSpeed);
        ctx.apply_input(&input);
        assert!(ctx.see_all);
        assert!(ctx.orbit_lines);
        assert_eq!(ctx.speed, Distance::from_ly(1.0));

        ctx.apply_input(&InputFrame::default().with_command(Command::ResetSpeed));
        assert_eq!(ctx.speed.as_mm(), RESET_SPEED_MM);
    }

    #[test]
    fn test_exposure_adjustments() {
        let mut ctx = context();
        let input = InputFrame::default()
            .holding(Action::AdjustExposure)
            .holding(Action::AdjustIso)
            .with_command(Command::Increase);
        ctx.apply_input(&input);
        assert_eq!(ctx.camera.optics.exposure_s, 4.0);
        assert_eq!(ctx.camera.optics.iso, 3200.0);
        assert_eq!(ctx.camera.optics.f_number, 2.8);

        let input = InputFrame::default()
            .holding(Action::AdjustAperture)
            .with_command(Command::Decrease);
        ctx.apply_input(&input);
        assert!((ctx.camera.optics.f_number - 2.7).abs() < 1e-12);
        assert_eq!(ctx.camera.optics.exposure_s, 4.0);

        // without a modifier nothing changes
        ctx.apply_input(&InputFrame::default().with_command(Command::Increase));
        assert_eq!(ctx.camera.optics.iso, 3200.0);
    }

    #[test]
    fn test_pointer_look() {
        let mut ctx = context();
        let fov = ctx.camera.fov_rad();
        ctx.apply_input(&InputFrame {
            pointer_delta: (10.0, -4.0),
            ..Default::default()
        });
        let expected_yaw = 10.0_f64.to_radians() * 0.05 * fov;
        let expected_pitch = 4.0_f64.to_radians() * 0.05 * fov;
        assert!((ctx.camera.yaw() - expected_yaw).abs() < 1e-12);
        assert!((ctx.camera.pitch() - expected_pitch).abs() < 1e-12);
    }

    #[test]
    fn test_pointer_look_stays_normalized() {
        let mut ctx = context();
        let input = InputFrame {
            pointer_delta: (5000.0, 3100.0),
            ..Default::default()
        };
        for _ in 0..500 {
            ctx.apply_input(&input);
            assert!(ctx.camera.yaw() > -PI && ctx.camera.yaw() <= PI);
            assert!(ctx.camera.pitch() > -PI && ctx.camera.pitch() <= PI);
        }
    }

    #[test]
    fn test_movement_along_basis() {
        let mut ctx = FrameContext::new(RenderConfig {
            fps: 128,
            ..Default::default()
        });
        ctx.speed = Distance::from_mm(128_000);
        // 1000 Mm per frame
        ctx.apply_input(&InputFrame::default().holding(Action::Forward));
        assert_eq!(ctx.camera.position.as_mm(), [0, 1000, 0]);

        ctx.apply_input(&InputFrame::default().holding(Action::Right));
        assert_eq!(ctx.camera.position.as_mm(), [-1000, 1000, 0]);

        ctx.apply_input(&InputFrame::default().holding(Action::Up));
        assert_eq!(ctx.camera.position.as_mm(), [-1000, 1000, 1000]);

        let all = InputFrame::default()
            .holding(Action::Backward)
            .holding(Action::Left)
            .holding(Action::Down);
        ctx.apply_input(&all);
        assert_eq!(ctx.camera.position.as_mm(), [0, 0, 0]);
    }
}
