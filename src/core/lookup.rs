use crate::core::Sample;

/// Lower-bound insertion index of `time` in an ascending sample slice.
///
/// Returns the first index whose time key is `>= time`, or `samples.len()`
/// when every sample is older.
#[must_use]
pub fn bisect_left(samples: &[Sample], time: f64) -> usize {
    samples.partition_point(|sample| sample.time_key() < time)
}

/// Index of the sample nearest in time to `time`.
///
/// Only queries that fall strictly between two samples resolve: an insertion
/// index of `0` or `len` means the query lies outside the series (or exactly
/// on the first sample) and yields `None` rather than an endpoint. Between the
/// two neighbors the closer one wins; an exact tie picks the later sample.
#[must_use]
pub fn nearest_sample_index(samples: &[Sample], time: f64) -> Option<usize> {
    if !time.is_finite() {
        return None;
    }

    let index = bisect_left(samples, time);
    if index == 0 || index >= samples.len() {
        return None;
    }

    let earlier_delta = time - samples[index - 1].time_key();
    let later_delta = samples[index].time_key() - time;
    if earlier_delta >= later_delta {
        Some(index)
    } else {
        Some(index - 1)
    }
}
