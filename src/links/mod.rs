//! Outbound links.
//!
//! The page never talks to the network itself: profile links and the resume
//! are handed to the platform opener, which launches them in a new browser
//! window (or the default PDF viewer).

pub mod opener;
