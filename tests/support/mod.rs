pub mod irisview_env;
