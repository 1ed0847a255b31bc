//! # Spotify Integration Module
//!
//! This module provides the source-catalog side of a migration: reading
//! playlist metadata and track listings from the Spotify Web API. It handles
//! all HTTP communication with Spotify, the Client Credentials token grant,
//! typed response parsing, and transparent pagination.
//!
//! ## Core Modules
//!
//! - [`auth`] - Client Credentials token requests against the Spotify
//!   accounts service. The obtained token is cached on disk by
//!   [`crate::management::TokenManager`] and renewed shortly before expiry.
//! - [`client`] - [`client::SpotifyClient`], the typed wrapper around the
//!   Web API endpoints playlift needs: playlist name/description, the full
//!   paginated track listing of a playlist, and the user's playlists.
//!
//! ## API Coverage
//!
//! - `GET /playlists/{id}` - Playlist name and description (fields-filtered)
//! - `GET /playlists/{id}/tracks` - Track pages, followed via `next` URLs
//! - `GET /me/playlists` - The authorized user's playlists
//! - `POST /api/token` - Client Credentials token grant
//!
//! ## Error Handling
//!
//! Rate-limit adjacent 502 responses are retried with a delay, matching the
//! behavior of the Spotify Web API under load. Everything else surfaces as a
//! [`client::SourceFetchError`] and is fatal to a migration run.

pub mod auth;
pub mod client;
