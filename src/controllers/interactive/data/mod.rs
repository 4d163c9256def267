pub mod render_trigger;
