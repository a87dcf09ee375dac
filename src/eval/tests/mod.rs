mod draw;
mod pipeline;
