pub mod deploy_bot;
