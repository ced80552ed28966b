//! Static solar-system reference markers and orbit guides.
//!
//! Planets sit at fixed offsets on the +X axis (no orbital motion). Earth
//! is at the origin and the Sun at +1 AU, so a planet with semi-major axis
//! `a` is placed at `1 AU - a`.

use crate::camera::projection::{project, ScreenPoint};
use crate::camera::Camera;
use crate::frame::Vertex;
use crate::units::{Distance, Position, Vec3};
use crate::Color;

pub struct Planet {
    pub name: &'static str,
    pub semi_major_axis_au: f64,
    pub color: [u8; 3],
    pub inclination_deg: f64,
}

pub const SUN_COLOR: [u8; 3] = [255, 204, 51];
pub const EARTH_COLOR: [u8; 3] = [0, 102, 204];
pub const MOON_COLOR: [u8; 3] = [128, 128, 128];
pub const MOON_ORBIT_AU: f64 = 0.00257;

pub const PLANETS: [Planet; 8] = [
    Planet {
        name: "Mercury",
        semi_major_axis_au: 0.387,
        color: [169, 169, 169],
        inclination_deg: 7.00,
    },
    Planet {
        name: "Venus",
        semi_major_axis_au: 0.723,
        color: [218, 165, 32],
        inclination_deg: 3.39,
    },
    Planet {
        name: "Mars",
        semi_major_axis_au: 1.524,
        color: [188, 39, 50],
        inclination_deg: 1.85,
    },
    Planet {
        name: "Jupiter",
        semi_major_axis_au: 5.203,
        color: [216, 179, 130],
        inclination_deg: 1.31,
    },
    Planet {
        name: "Saturn",
        semi_major_axis_au: 9.537,
        color: [210, 180, 140],
        inclination_deg: 2.49,
    },
    Planet {
        name: "Uranus",
        semi_major_axis_au: 19.19,
        color: [173, 216, 230],
        inclination_deg: 0.77,
    },
    Planet {
        name: "Neptune",
        semi_major_axis_au: 30.07,
        color: [63, 84, 186],
        inclination_deg: 1.77,
    },
    Planet {
        name: "Pluto",
        semi_major_axis_au: 39.50,
        color: [200, 155, 109],
        inclination_deg: 17.16,
    },
];

const EARTH_ORBIT_AU: f64 = 1.0;

/// Position of a body `au` from the Sun, on the Sun-Earth line
pub fn from_sun(au: f64) -> Position {
    Vec3::new(
        Distance::from_au(1.0) - Distance::from_au(au),
        Distance::ZERO,
        Distance::ZERO,
    )
}

pub fn sun_position() -> Position {
    from_sun(0.0)
}

/// Marker opacities for the outer system and the Moon.
///
/// Near Earth the Moon marker dominates; far out, the solar-system markers
/// fade once the camera is beyond 150 AU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    pub solar: u8,
    pub moon: u8,
}

impl Fade {
    const MOON_RANGE_AU: f64 = 0.01;
    const SOLAR_RANGE_AU: f64 = 150.0;

    pub fn at_distance(r_au: f64) -> Self {
        let moon = if r_au < Self::MOON_RANGE_AU {
            255
        } else {
            (255.0 * (-(r_au - Self::MOON_RANGE_AU) * 5.0).exp()) as u8
        };
        let solar = if r_au < Self::SOLAR_RANGE_AU {
            255 - moon
        } else {
            (255.0 * (-(r_au - Self::SOLAR_RANGE_AU) * 0.03).exp()) as u8
        };
        Fade { solar, moon }
    }

    pub fn for_camera(camera: &Camera) -> Self {
        Self::at_distance(camera.position.as_au().norm())
    }
}

fn rgba(rgb: [u8; 3], alpha: u8) -> Color {
    image::Rgba([rgb[0], rgb[1], rgb[2], alpha])
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: &'static str,
    pub position: Position,
    pub color: Color,
}

/// All reference markers with their faded colors
pub fn markers(fade: Fade) -> Vec<Marker> {
    let mut out = Vec::with_capacity(PLANETS.len() + 3);
    out.push(Marker {
        name: "Sun",
        position: sun_position(),
        color: rgba(SUN_COLOR, fade.solar),
    });
    out.extend(PLANETS.iter().map(|p| Marker {
        name: p.name,
        position: from_sun(p.semi_major_axis_au),
        color: rgba(p.color, fade.solar),
    }));
    out.push(Marker {
        name: "Moon",
        position: from_sun(EARTH_ORBIT_AU + MOON_ORBIT_AU),
        color: rgba(MOON_COLOR, fade.moon),
    });
    out.push(Marker {
        name: "Earth",
        position: from_sun(EARTH_ORBIT_AU),
        color: rgba(EARTH_COLOR, 255),
    });
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedMarker {
    pub name: &'static str,
    pub screen: ScreenPoint,
    pub color: Color,
}

/// Markers in front of the camera, in screen space
pub fn project_markers(camera: &Camera, markers: &[Marker]) -> Vec<ProjectedMarker> {
    markers
        .iter()
        .filter_map(|m| {
            let screen = project(camera, &m.position);
            screen.is_visible().then(|| ProjectedMarker {
                name: m.name,
                screen,
                color: m.color,
            })
        })
        .collect()
}

/// Sample a tilted circle in 1 degree steps and keep the visible points
pub fn orbit_strip(
    camera: &Camera,
    center: Position,
    radius: Distance,
    inclination_deg: f64,
    color: Color,
) -> Vec<Vertex> {
    let (sin_i, cos_i) = inclination_deg.to_radians().sin_cos();

    (0..360)
        .filter_map(|deg| {
            let (sin_phi, cos_phi) = (deg as f64).to_radians().sin_cos();
            let point = center
                + Vec3::new(
                    radius * cos_phi,
                    radius * sin_phi * cos_i,
                    radius * sin_phi * sin_i,
                );
            let p = project(camera, &point);
            p.is_visible().then(|| Vertex::new(p.x, p.y, color))
        })
        .collect()
}

/// Orbit guides for every planet around the Sun, plus the Moon around Earth
pub fn orbit_guides(camera: &Camera, fade: Fade) -> Vec<Vertex> {
    let sun = sun_position();
    let mut strip = Vec::new();
    for planet in &PLANETS {
        strip.extend(orbit_strip(
            camera,
            sun,
            Distance::from_au(planet.semi_major_axis_au),
            planet.inclination_deg,
            rgba(planet.color, fade.solar),
        ));
    }
    strip.extend(orbit_strip(
        camera,
        sun,
        Distance::from_au(EARTH_ORBIT_AU),
        0.0,
        rgba(EARTH_COLOR, fade.solar),
    ));
    strip.extend(orbit_strip(
        camera,
        Position::ZERO,
        Distance::from_au(MOON_ORBIT_AU),
        0.0,
        rgba(MOON_COLOR, fade.moon),
    ));
    strip
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_offsets() {
        assert_eq!(sun_position().x, Distance::from_au(1.0));
        assert_eq!(from_sun(1.0), Position::ZERO);
        let jupiter = from_sun(5.203);
        assert!((jupiter.x.as_au() + 4.203).abs() < 1e-5);
    }

    #[test]
    fn test_fade() {
        assert_eq!(Fade::at_distance(0.0), Fade { solar: 0, moon: 255 });
        let mid = Fade::at_distance(10.0);
        assert_eq!(mid.moon, 0);
        assert_eq!(mid.solar, 255);
        let far = Fade::at_distance(250.0);
        assert_eq!(far.solar, (255.0 * (-3.0f64).exp()) as u8);
        assert_eq!(Fade::at_distance(1.0e6).solar, 0);
    }

    #[test]
    fn test_markers() {
        let all = markers(Fade::at_distance(10.0));
        assert_eq!(all.len(), 11);
        assert_eq!(all[0].name, "Sun");
        let earth = all.iter().find(|m| m.name == "Earth").expect("earth marker");
        assert_eq!(earth.position, Position::ZERO);
        assert_eq!(earth.color.0[3], 255);
        let moon = all.iter().find(|m| m.name == "Moon").expect("moon marker");
        assert_eq!(moon.color.0[3], 0);
    }

    #[test]
    fn test_project_markers_from_behind_earth() {
        let mut camera = Camera::default();
        // stand 50 AU out on -X, looking toward the Sun
        camera.position = Vec3::new(Distance::from_au(-50.0), Distance::ZERO, Distance::ZERO);
        camera.set_orientation(-FRAC_PI_2, 0.0);
        let projected = project_markers(&camera, &markers(Fade::for_camera(&camera)));
        // Pluto, the farthest marker, sits at -38.5 AU
        assert_eq!(projected.len(), 11);
        for m in &projected {
            assert!((m.screen.x - 960.0).abs() < 1e-6);
            assert_eq!(m.screen.y, 540.0);
        }

        camera.set_orientation(FRAC_PI_2, 0.0);
        assert!(project_markers(&camera, &markers(Fade::for_camera(&camera))).is_empty());
    }

    #[test]
    fn test_orbit_strip_visibility() {
        let mut camera = Camera::default();
        // high above the ecliptic looking straight down
        camera.position = Vec3::new(Distance::ZERO, Distance::ZERO, Distance::from_au(10.0));
        camera.set_orientation(0.0, -FRAC_PI_2);
        let color = image::Rgba([255, 255, 255, 255]);
        let ring = orbit_strip(&camera, Position::ZERO, Distance::from_au(1.0), 0.0, color);
        assert_eq!(ring.len(), 360);

        // level camera in the ring's plane sees only the far half
        camera.position = Position::ZERO;
        camera.set_orientation(0.0, 0.0);
        let ring = orbit_strip(&camera, Position::ZERO, Distance::from_au(1.0), 0.0, color);
        assert!(ring.len() < 180);
        assert!(ring.len() > 170);
    }

    #[test]
    fn test_orbit_guides_nonempty() {
        let mut camera = Camera::default();
        camera.position = Vec3::new(
            Distance::ZERO,
            Distance::from_au(-80.0),
            Distance::from_au(20.0),
        );
        let guides = orbit_guides(&camera, Fade::for_camera(&camera));
        assert!(!guides.is_empty());
    }
}
