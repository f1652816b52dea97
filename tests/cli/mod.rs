mod help_contract;
mod options_contract;
mod target_contract;
