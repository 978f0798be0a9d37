// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers: even spacing, "nice" value ticks, tick label formatting.

/// Upper bound on the number of ticks `tick_values` emits.
pub const MAX_TICK_COUNT: usize = 64;

/// `steps` evenly spaced values from `start` to `end` inclusive. Interpolates
/// endpoint-wise so the result stays finite for any finite bounds.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let last = (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            let t = i as f64 / last;
            start * (1.0 - t) + end * t
        })
        .collect()
}

/// Round `x` to a 1/2/5 x 10^k value. `round` picks the closest candidate,
/// otherwise the smallest candidate that is >= x.
pub fn nice_number(x: f64, round: bool) -> f64 {
    if !(x > 0.0) || !x.is_finite() { return 1.0; }
    let exp = x.log10().floor();
    let frac = x / 10f64.powf(exp);
    let nice = if round {
        if frac < 1.5 { 1.0 } else if frac < 3.0 { 2.0 } else if frac < 7.0 { 5.0 } else { 10.0 }
    } else if frac <= 1.0 { 1.0 } else if frac <= 2.0 { 2.0 } else if frac <= 5.0 { 5.0 } else { 10.0 };
    nice * 10f64.powf(exp)
}

/// Value ticks covering `[min, max]` with roughly `max_ticks` intervals.
/// Returns `(lo, hi, step)`; `lo`/`hi` are multiples of `step` enclosing the
/// range, or the data bounds themselves where rounding out would overflow.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> (f64, f64, f64) {
    let (min, max) = if max < min { (max, min) } else { (min, max) };
    let span = max - min;
    let span = if span.abs() < 1e-12 { 1.0 } else if span.is_finite() { span } else { f64::MAX };
    let intervals = max_ticks.max(2) as f64 - 1.0;
    // Rounding the span up overflows near f64::MAX.
    let coarse = match nice_number(span, false) {
        c if c.is_finite() => c,
        _ => span,
    };
    let step = nice_number(coarse / intervals, true);
    let lo = match (min / step).floor() * step {
        v if v.is_finite() => v,
        _ => min,
    };
    let mut hi = match (max / step).ceil() * step {
        v if v.is_finite() => v,
        _ => max,
    };
    if hi <= lo { hi = lo + step; }
    (lo, hi, step)
}

/// Tick values from `lo` to `hi` (inclusive) at `step`. Falls back to
/// [`MAX_TICK_COUNT`] evenly spaced values when `step` would produce more.
pub fn tick_values(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) { return vec![lo, hi]; }
    let n = ((hi - lo) / step).round();
    if !(n >= 0.0 && n < MAX_TICK_COUNT as f64) {
        return linspace(lo, hi, MAX_TICK_COUNT);
    }
    (0..=n as usize).map(|i| lo + step * i as f64).filter(|v| v.is_finite()).collect()
}

/// Format a tick value; integers get thousands separators, fractional steps
/// keep as many decimals as the step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 { 0 } else { (-step.log10().floor()) as usize };
    let text = format!("{:.*}", decimals, value);
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 { grouped.push(','); }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None if grouped == "0" => grouped,
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_start_at_zero_for_zero_min() {
        let (lo, hi, step) = nice_ticks(0.0, 87.0, 6);
        assert_eq!(lo, 0.0);
        assert!(hi >= 87.0);
        assert_eq!(step, 20.0);
    }

    #[test]
    fn nice_ticks_flat_range_gets_span() {
        let (lo, hi, _) = nice_ticks(5.0, 5.0, 6);
        assert!(lo <= 5.0 && hi > lo);
    }

    #[test]
    fn nice_ticks_stay_finite_near_f64_max() {
        let (lo, hi, step) = nice_ticks(0.0, 1.7e308, 6);
        assert!(lo.is_finite() && hi.is_finite() && step.is_finite());
        assert_eq!(lo, 0.0);
        assert!(hi >= 1.7e308);
        assert!(step > 1.0e300);
        let ticks = tick_values(lo, hi, step);
        assert!(ticks.len() <= MAX_TICK_COUNT);
        assert!(ticks.iter().all(|t| t.is_finite()));
    }

    #[test]
    fn nice_ticks_handle_full_f64_range() {
        let (lo, hi, step) = nice_ticks(-f64::MAX, f64::MAX, 6);
        assert!(lo.is_finite() && hi.is_finite() && step > 0.0);
        let ticks = tick_values(lo, hi, step);
        assert!(!ticks.is_empty() && ticks.len() <= MAX_TICK_COUNT);
        assert!(ticks.iter().all(|t| t.is_finite()));
    }

    #[test]
    fn tick_values_cap_runaway_counts() {
        let ticks = tick_values(0.0, 1.0e9, 1.0);
        assert_eq!(ticks.len(), MAX_TICK_COUNT);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[MAX_TICK_COUNT - 1], 1.0e9);
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_tick(1234567.0, 1000.0), "1,234,567");
        assert_eq!(format_tick(-1500.0, 500.0), "-1,500");
        assert_eq!(format_tick(0.5, 0.1), "0.5");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }
}
