//! "Nice" linear axis ticks (1, 2 or 5 times a power of ten), following d3-array's `ticks`.

/// Tick step expressed so that `i / divisor` (or `i * multiplier`) yields exact decimal values.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Multiply(f64),
    Divide(f64),
}

impl Step {
    fn value_at(self, i: i64) -> f64 {
        match self {
            Step::Multiply(inc) => i as f64 * inc,
            Step::Divide(inc) => i as f64 / inc,
        }
    }
}

fn tick_range(start: f64, stop: f64, count: f64) -> Option<(i64, i64, Step)> {
    if !(count > 0.0) {
        return None;
    }
    let raw = (stop - start) / count;
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }

    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (lo, hi, step) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut lo = (start * inc).round() as i64;
        let mut hi = (stop * inc).round() as i64;
        if (lo as f64) / inc < start {
            lo += 1;
        }
        if (hi as f64) / inc > stop {
            hi -= 1;
        }
        (lo, hi, Step::Divide(inc))
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut lo = (start / inc).round() as i64;
        let mut hi = (stop / inc).round() as i64;
        if (lo as f64) * inc < start {
            lo += 1;
        }
        if (hi as f64) * inc > stop {
            hi -= 1;
        }
        (lo, hi, Step::Multiply(inc))
    };

    if hi < lo && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    Some((lo, hi, step))
}

/// Returns roughly `count` evenly spaced round values covering `[start, stop]`, ascending.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (a, b) = if stop < start {
        (stop, start)
    } else {
        (start, stop)
    };
    let Some((lo, hi, step)) = tick_range(a, b, count as f64) else {
        return Vec::new();
    };
    (lo..=hi).map(|i| step.value_at(i)).collect()
}

/// Formats a tick value the way a JS number prints, without float noise.
pub fn tick_label(v: f64) -> String {
    let rounded = (v * 1e12).round() / 1e12;
    let s = rounded.to_string();
    if s == "-0" { "0".to_string() } else { s }
}
