use crate::{
    CoreResult, Frequency, KeyIdentity, PianoError, SynthSettings, ToneSink, Waveform,
    synth::Voice,
};

use std::{
    collections::VecDeque,
    panic::Location,
    sync::{Arc, Mutex},
};

use cpal::{
    Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

type VoiceBank = Arc<Mutex<VecDeque<Voice>>>;

struct OutputStream {
    /// Kept alive for as long as the engine exists; dropping it stops audio.
    _stream: Stream,
    voices: VoiceBank,
    sample_rate: u32,
}

/// Oscillator synthesizer on the default cpal output device.
///
/// The device is opened on the first [`ensure_active`](ToneSink::ensure_active)
/// call and reused afterwards. Until then, [`emit`](ToneSink::emit) fails with
/// [`PianoError::AudioInactive`].
///
/// # Thread Safety
///
/// The cpal stream is `!Send` on some backends, so the engine should stay on
/// the thread that created it. Voices are shared with the audio callback
/// through a mutex held only while mixing one buffer.
pub struct SynthEngine {
    settings: SynthSettings,
    output: Option<OutputStream>,
}

impl SynthEngine {
    /// Create an inactive engine.
    pub fn new(settings: SynthSettings) -> Self {
        Self {
            settings,
            output: None,
        }
    }

    /// True once the output device is open.
    pub fn is_active(&self) -> bool {
        self.output.is_some()
    }

    /// Current tone settings.
    pub fn settings(&self) -> &SynthSettings {
        &self.settings
    }

    /// Change the oscillator shape for subsequent notes.
    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.settings.waveform = waveform;
        info!(%waveform, "Waveform changed");
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn open_output(&self) -> CoreResult<OutputStream> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or(PianoError::NoOutputDevice {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let supported = device
            .default_output_config()
            .map_err(|e| PianoError::DeviceError {
                reason: format!("Failed to get config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config: StreamConfig = supported.into();
        let channels = usize::from(config.channels.max(1));
        let sample_rate = config.sample_rate;

        let voices: VoiceBank = Arc::new(Mutex::new(VecDeque::with_capacity(
            self.settings.max_voices,
        )));
        let callback_voices = Arc::clone(&voices);

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    // A poisoned lock still holds valid voices.
                    let mut bank = callback_voices.lock().unwrap_or_else(|e| {
                        error!("Voice bank lock poisoned, recovering: {}", e);
                        e.into_inner()
                    });
                    render(&mut bank, data, channels);
                },
                |err| {
                    error!("Audio output stream error: {}", err);
                },
                None,
            )
            .map_err(|e| PianoError::DeviceError {
                reason: format!("Failed to build stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| PianoError::DeviceError {
            reason: format!("Failed to start stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(
            device_id = ?device.id(),
            sample_rate,
            channels,
            "Audio output started"
        );

        Ok(OutputStream {
            _stream: stream,
            voices,
            sample_rate,
        })
    }
}

impl ToneSink for SynthEngine {
    #[track_caller]
    fn ensure_active(&mut self) -> CoreResult<()> {
        if self.output.is_none() {
            self.output = Some(self.open_output()?);
        }
        Ok(())
    }

    #[track_caller]
    fn emit(&mut self, frequency: Frequency, key: &KeyIdentity) -> CoreResult<()> {
        let Some(output) = &self.output else {
            return Err(PianoError::AudioInactive {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let voice = Voice::new(frequency, &self.settings, output.sample_rate);

        let mut bank = output.voices.lock().map_err(|e| PianoError::DeviceError {
            reason: format!("Failed to lock voices: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        bank.push_back(voice);
        while bank.len() > self.settings.max_voices {
            bank.pop_front();
            warn!(max_voices = self.settings.max_voices, "Voice limit hit, dropped oldest");
        }

        debug!(%frequency, %key, voices = bank.len(), "Tone emitted");

        Ok(())
    }
}

/// Mix every live voice into an interleaved buffer and drop finished voices.
pub(crate) fn render(voices: &mut VecDeque<Voice>, data: &mut [f32], channels: usize) {
    for frame in data.chunks_mut(channels.max(1)) {
        let mixed: f32 = voices.iter_mut().map(Voice::next_sample).sum();
        let mixed = mixed.clamp(-1.0, 1.0);
        for sample in frame {
            *sample = mixed;
        }
    }

    voices.retain(|voice| !voice.is_finished());
}
