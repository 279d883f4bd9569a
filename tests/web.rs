//! Browser smoke tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use hex_reversi::wasm::HexReversi;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn state_is_a_plain_object() {
    let session = HexReversi::new(5).map_err(JsValue::from).unwrap();
    let state = session.state().map_err(JsValue::from).unwrap();

    let size = js_sys::Reflect::get(&state, &JsValue::from_str("board_size")).unwrap();
    assert_eq!(size.as_f64(), Some(5.0));
    let over = js_sys::Reflect::get(&state, &JsValue::from_str("is_game_over")).unwrap();
    assert_eq!(over.as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn invalid_size_is_rejected() {
    assert!(HexReversi::new(4).is_err());
}

#[wasm_bindgen_test]
fn unknown_strategy_is_rejected() {
    let mut session = HexReversi::new(7).map_err(JsValue::from).unwrap();
    assert!(session.ai_move("minimax").is_err());
    assert!(session.ai_move("capture").map_err(JsValue::from).unwrap().is_object());
}
