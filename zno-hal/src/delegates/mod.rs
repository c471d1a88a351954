mod builder;
mod context;
