mod sizing_properties;
mod state_machine_properties;
