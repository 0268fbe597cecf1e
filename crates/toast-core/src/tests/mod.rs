//! Lifecycle tests driving the daemon through its handle against a mock
//! renderer.


mod lifecycle;
