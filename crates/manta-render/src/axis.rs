use crate::model::{AxisLayout, AxisOrientation, TickLayout};
use manta_core::scale::LinearScale;

const MAJOR_TICK_SIZE: f64 = 6.0;
const MINOR_TICK_SIZE: f64 = 3.0;

/// Round tick values over `[start, stop]`, aiming for roughly `count` ticks.
///
/// The step is snapped to 1/2/5 × 10^k the way D3 picks linear ticks, so
/// labels come out as short decimals. Ticks never fall outside the interval.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };

    let step = (hi - lo) / count as f64;
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let mut out = Vec::new();
    if power < 0.0 {
        // Work in units of 1/inc to keep values like 0.35 printing short.
        let inv = 10f64.powf(-power) / factor;
        let i0 = (lo * inv).ceil() as i64;
        let i1 = (hi * inv).floor() as i64;
        for i in i0..=i1 {
            out.push(i as f64 / inv);
        }
    } else {
        let inc = 10f64.powf(power) * factor;
        let i0 = (lo / inc).ceil() as i64;
        let i1 = (hi / inc).floor() as i64;
        for i in i0..=i1 {
            out.push(i as f64 * inc);
        }
    }

    if stop < start {
        out.reverse();
    }
    out
}

/// Builds the tick list for one axis: major ticks at nice values with labels,
/// plus unlabeled sub-ticks at the midpoints between consecutive majors.
pub(crate) fn layout_axis(
    scale: &LinearScale,
    orientation: AxisOrientation,
    origin: (f64, f64),
    length: f64,
    tick_count: usize,
    color: &str,
) -> AxisLayout {
    let (d0, d1) = scale.domain();
    let majors = nice_ticks(d0, d1, tick_count);

    let mut ticks: Vec<TickLayout> = Vec::with_capacity(majors.len() * 2);
    for (i, &value) in majors.iter().enumerate() {
        ticks.push(TickLayout {
            value,
            offset: scale.scale(value),
            size: MAJOR_TICK_SIZE,
            label: Some(format_tick(value)),
        });
        if let Some(&next) = majors.get(i + 1) {
            let mid = (value + next) / 2.0;
            ticks.push(TickLayout {
                value: mid,
                offset: scale.scale(mid),
                size: MINOR_TICK_SIZE,
                label: None,
            });
        }
    }

    AxisLayout {
        orientation,
        origin,
        length,
        ticks,
        color: color.to_string(),
    }
}

pub(crate) fn format_tick(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let v = if value == 0.0 { 0.0 } else { value };
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}
