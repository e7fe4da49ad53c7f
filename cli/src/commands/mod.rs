pub(crate) mod banner;
pub(crate) mod run;

pub(crate) use banner::print_banner;
pub(crate) use run::command_run;
