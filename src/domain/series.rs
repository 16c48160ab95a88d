// Series transforms: densification and hourly grouping
use super::telemetry::{Coordinate, HourGroup};

pub const DEFAULT_MIN_POINTS: usize = 5;
/// Upper bound on interpolated points per gap accepted from callers.
pub const MAX_DENSIFY: usize = 100;

/// Insert `n` linearly interpolated points between every adjacent pair.
///
/// Output length is `(len - 1) * (n + 1) + 1` for two or more points; shorter
/// inputs come back unchanged.
pub fn densify(points: &[Coordinate], n: usize) -> Vec<Coordinate> {
    let Some(last) = points.last() else {
        return Vec::new();
    };

    let capacity = n
        .checked_add(1)
        .and_then(|step| (points.len() - 1).checked_mul(step))
        .and_then(|len| len.checked_add(1))
        .unwrap_or(0);
    let mut result = Vec::with_capacity(capacity);
    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        result.push(p1);

        for j in 1..=n {
            let t = j as f64 / (n + 1) as f64;
            result.push(Coordinate::new(
                p1.x + (p2.x - p1.x) * t,
                p1.y + (p2.y - p1.y) * t,
            ));
        }
    }

    result.push(*last);
    result
}

/// Bucket points into hour-aligned groups, keeping only buckets holding more
/// than `min_points` points. Groups come back in ascending hour order.
pub fn group_by_hour(points: &[Coordinate], min_points: usize) -> Vec<HourGroup> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut groups = Vec::new();
    let mut current: Option<(i64, Vec<Coordinate>)> = None;

    for p in sorted {
        let hour_start = p.hour_start();
        if let Some((start, bucket)) = current.as_mut() {
            if *start == hour_start {
                bucket.push(p);
                continue;
            }
        }

        if let Some((start, bucket)) = current.replace((hour_start, vec![p])) {
            flush(&mut groups, start, bucket, min_points);
        }
    }

    if let Some((start, bucket)) = current {
        flush(&mut groups, start, bucket, min_points);
    }

    groups
}

fn flush(groups: &mut Vec<HourGroup>, hour_start: i64, bucket: Vec<Coordinate>, min_points: usize) {
    if bucket.len() > min_points {
        groups.push(HourGroup::new(hour_start, bucket));
    } else {
        tracing::trace!(hour_start, points = bucket.len(), "dropping sparse hour bucket");
    }
}
