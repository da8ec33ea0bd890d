//! Count-up animation for statistics such as "250+".

use crate::COUNTER_DURATION_MS;

pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub scale: f64,
    pub done: bool,
}

// CounterTarget
//
// only text that starts with an integer and carries a "+" animates; anything else is left
// as written.  the final frame is the original literal, not a reformatted number
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    value: u64,
    literal: String,
}

impl CounterTarget {
    pub fn parse(text: &str) -> Option<Self> {
        if !text.contains('+') {
            return None;
        }

        let digits: String = text
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let value = digits.parse::<u64>().ok()?;

        Some(CounterTarget {
            value,
            literal: text.to_owned(),
        })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn initial_text() -> &'static str {
        "0"
    }

    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        let progress = (elapsed_ms.max(0.0) / COUNTER_DURATION_MS).min(1.0);

        if progress >= 1.0 {
            return CounterFrame {
                text: self.literal.clone(),
                scale: 1.0,
                done: true,
            };
        }

        let current = (ease_out_expo(progress) * self.value as f64).floor() as u64;

        CounterFrame {
            text: format!("{current}+"),
            scale: 1.0 + (1.0 - (progress - 0.5).abs() * 2.0) * 0.1,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_number_and_plus() {
        assert_eq!(CounterTarget::parse("250+").map(|t| t.value()), Some(250));
        assert_eq!(CounterTarget::parse(" 40+ clubs").map(|t| t.value()), Some(40));
        assert!(CounterTarget::parse("250").is_none());
        assert!(CounterTarget::parse("many+").is_none());
        assert!(CounterTarget::parse("").is_none());
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.95);
    }

    #[test]
    fn counter_is_monotonic_and_ends_on_literal() {
        let target = CounterTarget::parse("250+").expect("animates");
        let mut last = 0u64;

        let mut elapsed = 0.0;
        loop {
            let frame = target.frame(elapsed);
            if frame.done {
                assert_eq!(frame.text, "250+");
                assert_eq!(frame.scale, 1.0);
                break;
            }

            let shown: u64 = frame
                .text
                .trim_end_matches('+')
                .parse()
                .expect("numeric frame");
            assert!(shown >= last, "{shown} after {last}");
            assert!(shown <= 250);
            last = shown;

            elapsed += 16.0;
        }

        assert_eq!(target.frame(0.0).text, "0+");
        assert!(target.frame(COUNTER_DURATION_MS * 2.0).done);
    }

    #[test]
    fn pulse_peaks_mid_animation() {
        let target = CounterTarget::parse("10+").expect("animates");

        let start = target.frame(0.0).scale;
        let mid = target.frame(COUNTER_DURATION_MS / 2.0).scale;
        assert!((start - 1.0).abs() < 1e-9);
        assert!((mid - 1.1).abs() < 1e-9);
    }
}
