//! WASM bindings for Liberty Core.
//!
//! This module provides JavaScript-friendly bindings for inspecting Liberty
//! libraries in a browser or Node.js.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmLibrary } from 'liberty_core';
//!
//! await init();
//!
//! const text = await (await fetch('asap7.lib')).text();
//! const lib = new WasmLibrary(text);
//!
//! console.log(lib.cell_names());
//! console.log(lib.pin_capacitance('A2O1A1Ixp33_ASAP7_75t_L', 'A1'));
//! ```

use wasm_bindgen::prelude::*;

use crate::liberty::{self, Library};
use crate::lookup;
use crate::query::{find_attribute_numeric, find_child_groups};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A parsed Liberty library, queryable from JavaScript.
#[wasm_bindgen]
pub struct WasmLibrary {
    library: Library,
}

#[wasm_bindgen]
impl WasmLibrary {
    /// Parse Liberty text.
    ///
    /// # Returns
    /// A new `WasmLibrary`, or an error string describing the parse failure.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> Result<WasmLibrary, JsValue> {
        let library = liberty::parse(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmLibrary { library })
    }

    /// The library's name.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.library.name().to_string()
    }

    /// Names of all cells, in file order.
    #[wasm_bindgen]
    pub fn cell_names(&self) -> Vec<String> {
        find_child_groups(self.library.root(), "cell")
            .map(|cell| cell.instance_name.clone())
            .collect()
    }

    /// The `capacitance` of `cell`/`pin`.
    ///
    /// Fails with a message naming whichever of cell, pin, or attribute is missing.
    #[wasm_bindgen]
    pub fn pin_capacitance(&self, cell: &str, pin: &str) -> Result<f64, JsValue> {
        lookup::pin_capacitance(&self.library, cell, pin, &[])
            .map(|report| report.capacitance)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Any numeric attribute of `cell`/`pin`, or `undefined` if absent or not numeric.
    #[wasm_bindgen]
    pub fn numeric_attribute(&self, cell: &str, pin: &str, name: &str) -> Option<f64> {
        let pin = lookup::find_pin(&self.library, cell, pin).ok()?;
        find_attribute_numeric(pin, name)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
