// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time source for eddy's time-based operators.
//!
//! Operators never call a global timer: they receive a [`Clock`](clock::Clock)
//! and ask it for the current instant and for sleep futures. Tests inject the
//! same clock with paused time to get deterministic schedules.

pub mod clock;
pub mod impls;
