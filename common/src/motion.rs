//! Pointer and scroll driven transforms: parallax, card tilt, button ripples.

use crate::viewport::{Rect, section_in_range};

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn translate(&self) -> String {
        format!("transform: translate({:.2}px, {:.2}px);", self.x, self.y)
    }
}

// hero decorations
//
// `x` and `y` are the pointer position as a fraction of the window; element i drifts
// further the higher its index, cycling every three (horizontal) and two (vertical)
pub fn hero_parallax(x: f64, y: f64, index: usize) -> Offset {
    let factor_x = ((index % 3) + 1) as f64 * 15.0;
    let factor_y = ((index % 2) + 1) as f64 * 15.0;

    Offset {
        x: (x - 0.5) * factor_x,
        y: (y - 0.5) * factor_y,
    }
}

// background layers of the news and gallery sections, alternating direction
pub fn layer_parallax(scroll_y: f64, section_top: f64, index: usize, varied: bool) -> f64 {
    let value = (scroll_y - section_top) * 0.2;
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
    let intensity = if varied {
        0.5 + (index % 3) as f64 * 0.2
    } else {
        1.0
    };

    value * direction * intensity
}

// staff particles drift down at a per-particle speed once the section is in range
pub fn staff_parallax(
    scroll_y: f64,
    section_top: f64,
    section_height: f64,
    viewport_height: f64,
    index: usize,
) -> Option<f64> {
    if !section_in_range(scroll_y, section_top, section_height, viewport_height) {
        return None;
    }

    let offset = (scroll_y - (section_top - viewport_height)) * 0.1;
    let speed = 0.05 + index as f64 * 0.02;

    Some(offset * speed)
}

// about particles, only applied within a window around the section top
pub fn about_parallax(scroll_y: f64, section_top: f64, index: usize) -> Option<Offset> {
    let relative = scroll_y - section_top;
    if relative <= -500.0 || relative >= 1000.0 {
        return None;
    }

    let speed = 0.05 + index as f64 * 0.02;
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };

    Some(Offset {
        x: direction * relative * speed,
        y: relative * speed * 0.5,
    })
}

// about particles following the pointer within the section
pub fn about_pointer_parallax(section: &Rect, client_x: f64, client_y: f64, index: usize) -> Offset {
    if section.width <= 0.0 || section.height <= 0.0 {
        return Offset::default();
    }

    let x = (client_x - section.left) / section.width - 0.5;
    let y = (client_y - section.top) / section.height - 0.5;
    let intensity = 15.0 + index as f64 * 5.0;
    let speed = 1.0 + index as f64 * 0.2;

    Offset {
        x: x * intensity * speed,
        y: y * intensity * speed,
    }
}

// TiltProfile
//
// how far a card leans towards the pointer, and how it is lifted while hovered
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltProfile {
    pub max_degrees: f64,
    pub perspective_px: f64,
    pub scale: f64,
    pub lift_px: f64,
}

impl TiltProfile {
    pub const STAFF: TiltProfile = TiltProfile {
        max_degrees: 5.0,
        perspective_px: 1000.0,
        scale: 1.05,
        lift_px: 5.0,
    };

    pub const ABOUT: TiltProfile = TiltProfile {
        max_degrees: 8.0,
        perspective_px: 800.0,
        scale: 1.05,
        lift_px: 0.0,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    // pointer offset from the card centre, in px
    pub dx: f64,
    pub dy: f64,
    // pointer position within the card, in percent
    pub glare_x: f64,
    pub glare_y: f64,
    // 1 at the centre, 0 at the corners
    pub intensity: f64,
}

impl Tilt {
    pub fn compute(profile: &TiltProfile, card: &Rect, client_x: f64, client_y: f64) -> Tilt {
        if card.width <= 0.0 || card.height <= 0.0 {
            return Tilt::default();
        }

        let (cx, cy) = card.center();
        let dx = client_x - cx;
        let dy = client_y - cy;
        let half_w = card.width / 2.0;
        let half_h = card.height / 2.0;

        let distance = dx.hypot(dy);
        let max_distance = half_w.hypot(half_h);

        Tilt {
            rotate_x: -(dy / half_h) * profile.max_degrees,
            rotate_y: (dx / half_w) * profile.max_degrees,
            dx,
            dy,
            glare_x: (client_x - card.left) / card.width * 100.0,
            glare_y: (client_y - card.top) / card.height * 100.0,
            intensity: (1.0 - distance / max_distance).clamp(0.0, 1.0),
        }
    }

    pub fn transform(&self, profile: &TiltProfile) -> String {
        let mut transform = format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            profile.perspective_px,
            self.rotate_x,
            self.rotate_y,
            s = profile.scale,
        );
        if profile.lift_px > 0.0 {
            transform.push_str(&format!(" translateY(-{}px)", profile.lift_px));
        }
        transform
    }

    pub fn shadow(&self) -> String {
        format!(
            "0 {:.1}px {:.1}px rgba(0, 0, 0, 0.1), {:.1}px {:.1}px {:.1}px rgba(0, 0, 0, 0.05)",
            15.0 + self.rotate_y.abs(),
            25.0 + self.rotate_x.abs() * 2.0,
            self.rotate_y * 0.5,
            self.rotate_x * -0.5,
            10.0 + self.rotate_y.abs(),
        )
    }

    pub fn glare(&self) -> String {
        format!(
            "background: radial-gradient(circle at {:.1}% {:.1}%, rgba(255,255,255,0.15) 0%, rgba(255,255,255,0) 50%);",
            self.glare_x, self.glare_y
        )
    }

    pub fn reflection(&self) -> String {
        format!(
            "opacity: {:.2}; background: radial-gradient(circle at {:.1}% {:.1}%, rgba(255,255,255,0.2) 0%, rgba(255,255,255,0) 60%);",
            0.5 + self.intensity * 0.5,
            self.glare_x,
            self.glare_y
        )
    }

    // inner elements shift by a fraction of the pointer offset for depth
    pub fn depth(&self, factor: f64) -> Offset {
        Offset {
            x: self.dx * factor,
            y: self.dy * factor,
        }
    }
}

// Ripple
//
// a circle as large as the button's longer side, centred on the click
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(button: &Rect, client_x: f64, client_y: f64) -> Ripple {
        let size = button.width.max(button.height);

        Ripple {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {s}px; height: {s}px; left: {:.1}px; top: {:.1}px;",
            self.left,
            self.top,
            s = self.size
        )
    }
}
