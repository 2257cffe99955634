// WebAssembly bindings for the Morse decoder
use js_sys::Array;
use morse_decoder::types::MorseDecodeResult;
use morse_decoder::MorseDecoder;
use wasm_bindgen::prelude::*;

mod support;

// Console logging for debugging
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// Macro to generate wasm_bindgen wrapper enums that mirror core enums
macro_rules! wasm_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident = $value:expr),* $(,)?
        }
        from $core_type:ty
    ) => {
        #[wasm_bindgen]
        $(#[$meta])*
        $vis enum $name {
            $($variant = $value),*
        }

        impl From<$core_type> for $name {
            fn from(value: $core_type) -> Self {
                match value {
                    $(<$core_type>::$variant => $name::$variant),*
                }
            }
        }

        impl From<$name> for $core_type {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => <$core_type>::$variant),*
                }
            }
        }
    };
}

wasm_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Signal {
        Dit = 0,
        Dah = 1,
        PauseShort = 2,
        PauseMedium = 3,
        PauseLong = 4,
    }
    from morse_decoder::Signal
}

impl Signal {
    /// Only whole numbers 0..=4 name a signal.
    fn from_index(index: f64) -> Option<Self> {
        if index.fract() != 0.0 || !(0.0..=4.0).contains(&index) {
            return None;
        }
        match index as u32 {
            0 => Some(Signal::Dit),
            1 => Some(Signal::Dah),
            2 => Some(Signal::PauseShort),
            3 => Some(Signal::PauseMedium),
            4 => Some(Signal::PauseLong),
            _ => None,
        }
    }
}

// Accepts enum indices or signal names.
fn signal_from_js(value: &JsValue) -> Result<morse_decoder::Signal, String> {
    if let Some(index) = value.as_f64() {
        return Signal::from_index(index)
            .map(Into::into)
            .ok_or_else(|| format!("Invalid signal index: {}", index));
    }
    match value.as_string() {
        Some(name) => name.parse().map_err(|e| format!("{}", e)),
        None => Err("Signals must be numbers or strings".to_string()),
    }
}

// Stateful decoder session for streaming use
#[wasm_bindgen(js_name = MorseDecoder)]
pub struct MorseDecoderJs {
    inner: MorseDecoder<'static>,
}

#[wasm_bindgen(js_class = MorseDecoder)]
impl MorseDecoderJs {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<MorseDecoderJs, JsValue> {
        let params = support::parse_params(config_json)?;
        Ok(MorseDecoderJs {
            inner: MorseDecoder::with_params(&params),
        })
    }

    pub fn decode(&mut self, signal: Signal) {
        self.inner.decode(signal.into());
    }

    #[wasm_bindgen(js_name = decodeNotation)]
    pub fn decode_notation(&mut self, notation: &str) -> Result<(), JsValue> {
        let signals = morse_decoder::parse_signals(notation).map_err(support::to_js_error)?;
        self.inner.decode_all(signals);
        Ok(())
    }

    /// Decode an array of signal indices or names. Nothing is decoded if any entry is invalid.
    #[wasm_bindgen(js_name = decodeArray)]
    pub fn decode_array(&mut self, signals: Array) -> Result<(), JsValue> {
        let parsed = signals
            .iter()
            .map(|value| signal_from_js(&value))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                web_sys::console::warn_1(&JsValue::from_str(&e));
                JsValue::from_str(&e)
            })?;
        self.inner.decode_all(parsed);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = takeOutput)]
    pub fn take_output(&mut self) -> String {
        self.inner.take_output()
    }

    #[wasm_bindgen(getter)]
    pub fn output(&self) -> String {
        self.inner.output().to_string()
    }

    #[wasm_bindgen(getter, js_name = lastSignal)]
    pub fn last_signal(&self) -> Signal {
        self.inner.last_signal().into()
    }

    #[wasm_bindgen(getter)]
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.stats()).map_err(JsValue::from)
    }
}

#[wasm_bindgen]
pub struct MorseDecodeResultJs {
    text: String,
    signals_processed: usize,
    characters_decoded: usize,
    protocol_violations: usize,
    undefined_codes: usize,
    empty_boundaries: usize,
    truncated: bool,
}

impl From<MorseDecodeResult> for MorseDecodeResultJs {
    fn from(result: MorseDecodeResult) -> Self {
        Self {
            text: result.text,
            signals_processed: result.stats.signals_processed,
            characters_decoded: result.stats.characters_decoded,
            protocol_violations: result.stats.protocol_violations,
            undefined_codes: result.stats.undefined_codes,
            empty_boundaries: result.stats.empty_boundaries,
            truncated: result.stats.truncated,
        }
    }
}

#[wasm_bindgen]
impl MorseDecodeResultJs {
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn signals_processed(&self) -> usize {
        self.signals_processed
    }

    #[wasm_bindgen(getter)]
    pub fn characters_decoded(&self) -> usize {
        self.characters_decoded
    }

    #[wasm_bindgen(getter)]
    pub fn protocol_violations(&self) -> usize {
        self.protocol_violations
    }

    #[wasm_bindgen(getter)]
    pub fn undefined_codes(&self) -> usize {
        self.undefined_codes
    }

    #[wasm_bindgen(getter)]
    pub fn empty_boundaries(&self) -> usize {
        self.empty_boundaries
    }

    #[wasm_bindgen(getter)]
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

// Main JavaScript API functions

#[wasm_bindgen]
pub fn decode_morse_signals(
    signals_json: &str,
    config_json: &str,
) -> Result<MorseDecodeResultJs, JsValue> {
    // Parse signals from JSON
    let signals: Vec<morse_decoder::Signal> = serde_json::from_str(signals_json).map_err(|e| {
        console_log!("decode_morse_signals: rejected signals JSON: {}", e);
        JsValue::from_str(&format!("Invalid signals JSON: {}", e))
    })?;

    let params = support::parse_params(config_json)?;

    Ok(morse_decoder::decode_signals(&signals, &params).into())
}

#[wasm_bindgen]
pub fn decode_morse_values(
    signals: JsValue,
    config_json: &str,
) -> Result<MorseDecodeResultJs, JsValue> {
    let signals: Vec<morse_decoder::Signal> = serde_wasm_bindgen::from_value(signals)?;
    let params = support::parse_params(config_json)?;

    Ok(morse_decoder::decode_signals(&signals, &params).into())
}

wasm_fn! {
    pub fn decode_morse_notation(notation: &str, config_json: &str)
    -> Result<MorseDecodeResultJs, JsValue>
    with morse_decoder::decode_notation, MorseDecodeResultJs::from
}
