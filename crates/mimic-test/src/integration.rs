//! End-to-end tests - generated players through boundary, scoring and game
//!
//! Tests:
//! - Faithful copies score near 1 regardless of where the copier stands
//! - Wrong poses score below faithful copies
//! - Tracker frames parsed at the boundary drive a full game
//! - Tracking loss and empty windows never break scoring
