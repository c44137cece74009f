mod analysis_session;
