//! End-to-end tests of the HTTP surface against stub feeds.

mod events_test;
mod helpers;
mod routing_test;
