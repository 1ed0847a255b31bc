//! # YouTube Music Integration Module
//!
//! Destination-catalog side of a migration: searching for song equivalents
//! and creating/populating playlists on YouTube Music.
//!
//! YouTube Music has no public OAuth application flow for library access;
//! like other tooling around it, playlift authenticates by replaying the
//! request headers of a logged-in browser session ([`creds`]). The client
//! itself ([`client`]) wraps the song search, library playlist listing,
//! playlist creation, and bulk item insertion endpoints.

pub mod client;
pub mod creds;
