//! 音声読み上げ（Web Speech API）

use web_sys::SpeechSynthesisUtterance;

const SPEECH_RATE: f32 = 0.9;

/// 読み上げに対応していないブラウザでは何もしない
pub fn speak(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(synth) = window.speech_synthesis() else {
        return;
    };
    if let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(text) {
        utterance.set_rate(SPEECH_RATE);
        synth.speak(&utterance);
    }
}
