// Studio workspace widgets: input, examples, errors and results

pub mod view;
