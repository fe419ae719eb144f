//! Counts the ordered ways to cover a distance with a set of step sizes, and
//! exposes the counters as a Netscript command:
//!
//! ```text
//! run stepcount.js count 6 --steps 1 2 3 --stats
//! run stepcount.js compare 30
//! run stepcount.js demo
//! ```

mod api;
pub mod command;
pub mod config;
pub mod counter;
pub mod error;
mod netscript;
pub mod steps;

use clap::{
    error::ErrorKind::DisplayHelp,
    Parser,
};
use js_sys::Array;
use wasm_bindgen::{
    prelude::*,
    JsValue,
};

pub use crate::{
    api::count_ordered_compositions,
    counter::{
        count_memoized,
        count_memoized_with_stats,
        count_naive,
        count_stairs,
        Memo,
        MemoStats,
        Strategy,
    },
    error::StepError,
    steps::{
        Count,
        Distance,
        StepSet,
    },
};
use crate::{
    command::{
        command_line,
        AppMode,
    },
    netscript::{
        Date,
        NsWrapper,
        NS,
    },
};

#[wasm_bindgen]
pub async fn execute_command(
    ns: &NS,
    args: Array,
) {
    let ns = NsWrapper::new(ns);

    // ns.args hands numbers over as numbers
    let parsed = command_line("run stepcount.js", args.iter(), arg_to_string);
    let strargs = match parsed {
        Ok(strargs) => strargs,
        Err(e) => {
            ns.tprint(&format!("unable to process message:\n{}", e));
            return;
        },
    };

    ns.print(&strargs.join(" "));

    match AppMode::try_parse_from(strargs) {
        Err(e) if e.kind() == DisplayHelp => {
            let error_msg =
                format!("\n{}", clap::Error::raw(e.kind().clone(), e),);

            ns.tprint(&*error_msg);
        },

        Ok(mode) => match mode.render(Date::now) {
            Ok(output) => ns.tprint(&format!("\n{}", output)),
            Err(e) => ns.tprint(&format!("unable to count: {}", e)),
        },

        Err(e) => ns.tprint(&format!("unable to process message:\n{}", e)),
    }
}

fn arg_to_string(arg: &JsValue) -> Option<String> {
    arg.as_string()
        .or_else(|| arg.as_f64().map(|n| n.to_string()))
}
