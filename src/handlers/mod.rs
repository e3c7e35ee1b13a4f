mod send;

pub use send::send_handler;
