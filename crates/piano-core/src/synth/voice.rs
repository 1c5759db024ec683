use crate::{Frequency, SynthSettings, Waveform};

/// One sounding note: oscillator plus exponential gain decay.
///
/// Gain starts at `settings.gain` and is multiplied by a constant factor
/// each sample so that it reaches `settings.floor_gain` exactly when the
/// note duration elapses, at which point the voice is finished.
#[derive(Debug, Clone)]
pub(crate) struct Voice {
    waveform: Waveform,
    phase: f64,
    phase_increment: f64,
    gain: f32,
    decay: f32,
    remaining: u64,
}

impl Voice {
    pub(crate) fn new(frequency: Frequency, settings: &SynthSettings, sample_rate: u32) -> Self {
        let sample_rate = f64::from(sample_rate.max(1));
        let total = (settings.note_duration.as_secs_f64() * sample_rate).round().max(1.0);
        let ratio = f64::from(settings.floor_gain) / f64::from(settings.gain);

        Self {
            waveform: settings.waveform,
            phase: 0.0,
            phase_increment: frequency.hz() / sample_rate,
            gain: settings.gain,
            decay: ratio.powf(1.0 / total) as f32,
            remaining: total as u64,
        }
    }

    pub(crate) fn next_sample(&mut self) -> f32 {
        if self.remaining == 0 {
            return 0.0;
        }

        let sample = self.waveform.sample(self.phase) as f32 * self.gain;

        self.phase = (self.phase + self.phase_increment).fract();
        self.gain *= self.decay;
        self.remaining -= 1;

        sample
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    #[cfg(test)]
    pub(crate) fn gain(&self) -> f32 {
        self.gain
    }
}
