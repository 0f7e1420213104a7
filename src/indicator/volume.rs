/// Multiple of the window mean the last session must exceed
pub const VOLUME_SPIKE_RATIO: f64 = 1.3;

/// True iff the last volume exceeds `ratio` times the mean of the window.
///
/// The mean includes the last session itself. An empty window is never a spike.
pub fn is_volume_spike(volumes: &[f64], ratio: f64) -> bool {
    let Some(&last) = volumes.last() else {
        return false;
    };
    let avg_volume = volumes.iter().sum::<f64>() / volumes.len() as f64;
    last > ratio * avg_volume
}
