/// Look-back period for the simple-average RSI
pub const RSI_PERIOD: usize = 14;

/// RSI over a close series using simple moving averages of gains and losses.
///
/// The output is aligned with `closes`. The first close has no delta and
/// counts as zero gain and zero loss, so the first defined value sits at
/// index `period - 1`. A window with no losses and some gains yields 100;
/// a window with neither is undefined.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 || closes.is_empty() {
        return Vec::new();
    }

    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    gains.push(0.0);
    losses.push(0.0);

    for pair in closes.windows(2) {
        let delta = pair[1] - pair[0];
        gains.push(if delta > 0.0 { delta } else { 0.0 });
        losses.push(if delta < 0.0 { -delta } else { 0.0 });
    }

    let mut series = vec![None; period.saturating_sub(1).min(closes.len())];
    series.extend(
        gains
            .windows(period)
            .zip(losses.windows(period))
            .map(|(g, l)| {
                let avg_gain = g.iter().sum::<f64>() / period as f64;
                let avg_loss = l.iter().sum::<f64>() / period as f64;
                rsi_value(avg_gain, avg_loss)
            }),
    );
    series
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        return if avg_gain > 0.0 { Some(100.0) } else { None };
    }
    let rs = avg_gain / avg_loss;
    let rsi = 100.0 - 100.0 / (1.0 + rs);
    rsi.is_finite().then_some(rsi)
}

/// Last defined RSI value, if the series has one
pub fn latest_rsi(closes: &[f64], period: usize) -> Option<f64> {
    rsi_series(closes, period).into_iter().rev().flatten().next()
}
