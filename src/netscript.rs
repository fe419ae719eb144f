use std::sync::Mutex;

use wasm_bindgen::prelude::*;

// thank you github.com/paulcdejean
#[wasm_bindgen]
extern "C" {
    pub type NS;

    #[wasm_bindgen(method)]
    fn tprint(
        this: &NS,
        print: &str,
    );

    #[wasm_bindgen(method)]
    fn print(
        this: &NS,
        print: &str,
    );

    pub type Date;

    #[wasm_bindgen(static_method_of = Date)]
    pub fn now() -> f64;
}

pub struct NsWrapper<'a>(Mutex<&'a NS>);

impl<'a> NsWrapper<'a> {
    pub fn new(ns: &'a NS) -> NsWrapper<'a> {
        NsWrapper(Mutex::new(ns))
    }

    /// Prints to the terminal.
    pub fn tprint(
        &self,
        text: &str,
    ) {
        self.0.lock().unwrap().tprint(text);
    }

    /// Prints to the script's own log window.
    pub fn print(
        &self,
        text: &str,
    ) {
        self.0.lock().unwrap().print(text);
    }
}
