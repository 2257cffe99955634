// Support utilities for WASM bindings
use morse_decoder::MorseDecodeParams;
use wasm_bindgen::JsValue;

/// Convert any displayable error into a JS string value
pub fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Parse decoder config JSON; empty input gives the defaults, malformed input is an error
pub fn parse_params(config_json: &str) -> Result<MorseDecodeParams, JsValue> {
    MorseDecodeParams::from_json(config_json).map_err(to_js_error)
}

/// Macro to generate a WASM function wrapper that calls a core function with parsed config
///
/// Usage:
/// ```ignore
/// wasm_fn! {
///     pub fn function_name(input: &str, config_json: &str) -> Result<OutputType, JsValue>
///     with core_function, OutputType::from
/// }
/// ```
#[macro_export]
macro_rules! wasm_fn {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($input:ident: &str, $config:ident: &str)
        -> Result<$result:ty, JsValue>
        with $core_fn:path, $result_wrapper:expr
    ) => {
        #[wasm_bindgen]
        $(#[$meta])*
        $vis fn $name($input: &str, $config: &str) -> Result<$result, JsValue> {
            let params = $crate::support::parse_params($config)?;
            $core_fn($input, &params)
                .map($result_wrapper)
                .map_err($crate::support::to_js_error)
        }
    };
}
