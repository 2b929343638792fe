// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod engine;
mod gateway;

pub use engine::{type_tag, MockEngine, MockEngineFactory};
pub use gateway::{GatewayResponse, StubGateway};
