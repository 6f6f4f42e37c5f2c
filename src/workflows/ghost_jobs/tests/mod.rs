mod batch;
mod common;
mod routing;
