pub mod probe_orchestrator;
