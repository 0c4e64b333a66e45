//! Curated table of upstream statistics.
//!
//! Each entry names one key from the `"global"` object of the
//! Traffic Server `stats_over_http` document and the exposition kind it is
//! published as. The table is data: adding a stat means adding a line here.
//!
//! Every entry is currently published as a counter, including point-in-time
//! values such as `*.bytes_used`, `*.percent_full` and `*current_*`. Changing
//! a kind changes the exposed `# TYPE` line, so dashboards must be checked
//! before retagging.

/// Exposition kind of a published sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    /// Keyword used on the `# TYPE` line.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One known upstream statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatField {
    /// Dotted upstream key, e.g. `proxy.process.cache.bytes_used`.
    pub key: &'static str,
    pub kind: MetricKind,
}

const fn counter(key: &'static str) -> StatField {
    StatField {
        key,
        kind: MetricKind::Counter,
    }
}

/// Look up a known statistic by its upstream key.
#[cfg(test)]
fn lookup(key: &str) -> Option<&'static StatField> {
    STATS.iter().find(|f| f.key == key)
}

/// All statistics published on every successful scrape, in emission order.
pub const STATS: &[StatField] = &[
    counter("proxy.node.restarts.proxy.stop_time"),
    counter("proxy.node.restarts.proxy.restart_count"),
    counter("proxy.process.http.user_agent_total_response_bytes"),
    counter("proxy.process.http.origin_server_total_request_bytes"),
    counter("proxy.process.http.origin_server_total_response_bytes"),
    counter("proxy.process.user_agent_total_bytes"),
    counter("proxy.process.origin_server_total_bytes"),
    counter("proxy.process.cache_total_hits"),
    counter("proxy.process.cache_total_misses"),
    counter("proxy.process.cache_total_requests"),
    counter("proxy.process.cache_total_hits_bytes"),
    counter("proxy.process.cache_total_misses_bytes"),
    counter("proxy.process.cache_total_bytes"),
    counter("proxy.process.current_server_connections"),
    counter("proxy.node.proxy_running"),
    counter("proxy.process.http.user_agent_total_request_bytes"),
    counter("proxy.process.http.completed_requests"),
    counter("proxy.process.http.total_incoming_connections"),
    counter("proxy.process.http.total_client_connections"),
    counter("proxy.process.http.total_client_connections_ipv4"),
    counter("proxy.process.http.total_client_connections_ipv6"),
    counter("proxy.process.http.total_server_connections"),
    counter("proxy.process.http.total_parent_proxy_connections"),
    counter("proxy.process.http.total_parent_retries"),
    counter("proxy.process.http.total_parent_switches"),
    counter("proxy.process.http.total_parent_retries_exhausted"),
    counter("proxy.process.http.total_parent_marked_down_count"),
    counter("proxy.process.http.avg_transactions_per_client_connection"),
    counter("proxy.process.http.avg_transactions_per_server_connection"),
    counter("proxy.process.http.transaction_counts.errors.pre_accept_hangups"),
    counter("proxy.process.http.transaction_totaltime.errors.pre_accept_hangups"),
    counter("proxy.process.http.incoming_requests"),
    counter("proxy.process.http.outgoing_requests"),
    counter("proxy.process.http.incoming_responses"),
    counter("proxy.process.http.invalid_client_requests"),
    counter("proxy.process.http.missing_host_hdr"),
    counter("proxy.process.http.get_requests"),
    counter("proxy.process.http.head_requests"),
    counter("proxy.process.http.trace_requests"),
    counter("proxy.process.http.options_requests"),
    counter("proxy.process.http.post_requests"),
    counter("proxy.process.http.put_requests"),
    counter("proxy.process.http.push_requests"),
    counter("proxy.process.http.delete_requests"),
    counter("proxy.process.http.purge_requests"),
    counter("proxy.process.http.connect_requests"),
    counter("proxy.process.http.extension_method_requests"),
    counter("proxy.process.http.broken_server_connections"),
    counter("proxy.process.http.cache_lookups"),
    counter("proxy.process.http.cache_writes"),
    counter("proxy.process.http.cache_updates"),
    counter("proxy.process.http.cache_deletes"),
    counter("proxy.process.http.tunnels"),
    counter("proxy.process.http.parent_proxy_transaction_time"),
    counter("proxy.process.http.user_agent_request_header_total_size"),
    counter("proxy.process.http.user_agent_response_header_total_size"),
    counter("proxy.process.http.user_agent_request_document_total_size"),
    counter("proxy.process.http.user_agent_response_document_total_size"),
    counter("proxy.process.http.origin_server_request_header_total_size"),
    counter("proxy.process.http.origin_server_response_header_total_size"),
    counter("proxy.process.http.origin_server_request_document_total_size"),
    counter("proxy.process.http.origin_server_response_document_total_size"),
    counter("proxy.process.http.parent_proxy_request_total_bytes"),
    counter("proxy.process.http.parent_proxy_response_total_bytes"),
    counter("proxy.process.http.pushed_response_header_total_size"),
    counter("proxy.process.http.pushed_document_total_size"),
    counter("proxy.process.http.response_document_size_100"),
    counter("proxy.process.http.response_document_size_1K"),
    counter("proxy.process.http.response_document_size_3K"),
    counter("proxy.process.http.response_document_size_5K"),
    counter("proxy.process.http.response_document_size_10K"),
    counter("proxy.process.http.response_document_size_1M"),
    counter("proxy.process.http.response_document_size_inf"),
    counter("proxy.process.http.request_document_size_100"),
    counter("proxy.process.http.request_document_size_1K"),
    counter("proxy.process.http.request_document_size_3K"),
    counter("proxy.process.http.request_document_size_5K"),
    counter("proxy.process.http.request_document_size_10K"),
    counter("proxy.process.http.request_document_size_1M"),
    counter("proxy.process.http.request_document_size_inf"),
    counter("proxy.process.http.user_agent_speed_bytes_per_sec_100"),
    counter("proxy.process.http.user_agent_speed_bytes_per_sec_1K"),
    counter("proxy.process.http.user_agent_speed_bytes_per_sec_10K"),
    counter("proxy.process.http.user_agent_speed_bytes_per_sec_100K"),
    counter("proxy.process.http.user_agent_speed_bytes_per_sec_1M"),
    counter("proxy.process.http.user_agent_speed_bytes_per_sec_10M"),
    counter("proxy.process.http.user_agent_speed_bytes_per_sec_100M"),
    counter("proxy.process.http.origin_server_speed_bytes_per_sec_100"),
    counter("proxy.process.http.origin_server_speed_bytes_per_sec_1K"),
    counter("proxy.process.http.origin_server_speed_bytes_per_sec_10K"),
    counter("proxy.process.http.origin_server_speed_bytes_per_sec_100K"),
    counter("proxy.process.http.origin_server_speed_bytes_per_sec_1M"),
    counter("proxy.process.http.origin_server_speed_bytes_per_sec_10M"),
    counter("proxy.process.http.origin_server_speed_bytes_per_sec_100M"),
    counter("proxy.process.http.cache_hit_fresh"),
    counter("proxy.process.http.cache_hit_mem_fresh"),
    counter("proxy.process.http.cache_hit_revalidated"),
    counter("proxy.process.http.cache_hit_ims"),
    counter("proxy.process.http.cache_hit_stale_served"),
    counter("proxy.process.http.cache_miss_cold"),
    counter("proxy.process.http.cache_miss_changed"),
    counter("proxy.process.http.cache_miss_client_no_cache"),
    counter("proxy.process.http.cache_miss_client_not_cacheable"),
    counter("proxy.process.http.cache_miss_ims"),
    counter("proxy.process.http.cache_read_error"),
    counter("proxy.process.http.tcp_hit_count_stat"),
    counter("proxy.process.http.tcp_hit_user_agent_bytes_stat"),
    counter("proxy.process.http.tcp_hit_origin_server_bytes_stat"),
    counter("proxy.process.http.tcp_miss_count_stat"),
    counter("proxy.process.http.tcp_miss_user_agent_bytes_stat"),
    counter("proxy.process.http.tcp_miss_origin_server_bytes_stat"),
    counter("proxy.process.http.tcp_expired_miss_count_stat"),
    counter("proxy.process.http.tcp_expired_miss_user_agent_bytes_stat"),
    counter("proxy.process.http.tcp_expired_miss_origin_server_bytes_stat"),
    counter("proxy.process.http.tcp_refresh_hit_count_stat"),
    counter("proxy.process.http.tcp_refresh_hit_user_agent_bytes_stat"),
    counter("proxy.process.http.tcp_refresh_hit_origin_server_bytes_stat"),
    counter("proxy.process.http.tcp_refresh_miss_count_stat"),
    counter("proxy.process.http.tcp_refresh_miss_user_agent_bytes_stat"),
    counter("proxy.process.http.tcp_refresh_miss_origin_server_bytes_stat"),
    counter("proxy.process.http.tcp_client_refresh_count_stat"),
    counter("proxy.process.http.tcp_client_refresh_user_agent_bytes_stat"),
    counter("proxy.process.http.tcp_client_refresh_origin_server_bytes_stat"),
    counter("proxy.process.http.tcp_ims_hit_count_stat"),
    counter("proxy.process.http.tcp_ims_hit_user_agent_bytes_stat"),
    counter("proxy.process.http.tcp_ims_hit_origin_server_bytes_stat"),
    counter("proxy.process.http.tcp_ims_miss_count_stat"),
    counter("proxy.process.http.tcp_ims_miss_user_agent_bytes_stat"),
    counter("proxy.process.http.tcp_ims_miss_origin_server_bytes_stat"),
    counter("proxy.process.http.err_client_abort_count_stat"),
    counter("proxy.process.http.err_client_abort_user_agent_bytes_stat"),
    counter("proxy.process.http.err_client_abort_origin_server_bytes_stat"),
    counter("proxy.process.http.err_client_read_error_count_stat"),
    counter("proxy.process.http.err_client_read_error_user_agent_bytes_stat"),
    counter("proxy.process.http.err_client_read_error_origin_server_bytes_stat"),
    counter("proxy.process.http.err_connect_fail_count_stat"),
    counter("proxy.process.http.err_connect_fail_user_agent_bytes_stat"),
    counter("proxy.process.http.err_connect_fail_origin_server_bytes_stat"),
    counter("proxy.process.http.misc_count_stat"),
    counter("proxy.process.http.misc_user_agent_bytes_stat"),
    counter("proxy.process.http.http_misc_origin_server_bytes_stat"),
    counter("proxy.process.http.background_fill_bytes_aborted_stat"),
    counter("proxy.process.http.background_fill_bytes_completed_stat"),
    counter("proxy.process.http.cache_write_errors"),
    counter("proxy.process.http.cache_read_errors"),
    counter("proxy.process.http.100_responses"),
    counter("proxy.process.http.101_responses"),
    counter("proxy.process.http.1xx_responses"),
    counter("proxy.process.http.200_responses"),
    counter("proxy.process.http.201_responses"),
    counter("proxy.process.http.202_responses"),
    counter("proxy.process.http.203_responses"),
    counter("proxy.process.http.204_responses"),
    counter("proxy.process.http.205_responses"),
    counter("proxy.process.http.206_responses"),
    counter("proxy.process.http.2xx_responses"),
    counter("proxy.process.http.300_responses"),
    counter("proxy.process.http.301_responses"),
    counter("proxy.process.http.302_responses"),
    counter("proxy.process.http.303_responses"),
    counter("proxy.process.http.304_responses"),
    counter("proxy.process.http.305_responses"),
    counter("proxy.process.http.307_responses"),
    counter("proxy.process.http.308_responses"),
    counter("proxy.process.http.3xx_responses"),
    counter("proxy.process.http.400_responses"),
    counter("proxy.process.http.401_responses"),
    counter("proxy.process.http.402_responses"),
    counter("proxy.process.http.403_responses"),
    counter("proxy.process.http.404_responses"),
    counter("proxy.process.http.405_responses"),
    counter("proxy.process.http.406_responses"),
    counter("proxy.process.http.407_responses"),
    counter("proxy.process.http.408_responses"),
    counter("proxy.process.http.409_responses"),
    counter("proxy.process.http.410_responses"),
    counter("proxy.process.http.411_responses"),
    counter("proxy.process.http.412_responses"),
    counter("proxy.process.http.413_responses"),
    counter("proxy.process.http.414_responses"),
    counter("proxy.process.http.415_responses"),
    counter("proxy.process.http.416_responses"),
    counter("proxy.process.http.4xx_responses"),
    counter("proxy.process.http.500_responses"),
    counter("proxy.process.http.501_responses"),
    counter("proxy.process.http.502_responses"),
    counter("proxy.process.http.503_responses"),
    counter("proxy.process.http.504_responses"),
    counter("proxy.process.http.505_responses"),
    counter("proxy.process.http.5xx_responses"),
    counter("proxy.process.http.transaction_counts.hit_fresh"),
    counter("proxy.process.http.transaction_totaltime.hit_fresh"),
    counter("proxy.process.http.transaction_counts.hit_fresh.process"),
    counter("proxy.process.http.transaction_totaltime.hit_fresh.process"),
    counter("proxy.process.http.transaction_counts.hit_revalidated"),
    counter("proxy.process.http.transaction_totaltime.hit_revalidated"),
    counter("proxy.process.http.transaction_counts.miss_cold"),
    counter("proxy.process.http.transaction_totaltime.miss_cold"),
    counter("proxy.process.http.transaction_counts.miss_not_cacheable"),
    counter("proxy.process.http.transaction_totaltime.miss_not_cacheable"),
    counter("proxy.process.http.transaction_counts.miss_changed"),
    counter("proxy.process.http.transaction_totaltime.miss_changed"),
    counter("proxy.process.http.transaction_counts.miss_client_no_cache"),
    counter("proxy.process.http.transaction_totaltime.miss_client_no_cache"),
    counter("proxy.process.http.transaction_counts.errors.aborts"),
    counter("proxy.process.http.transaction_totaltime.errors.aborts"),
    counter("proxy.process.http.transaction_counts.errors.possible_aborts"),
    counter("proxy.process.http.transaction_totaltime.errors.possible_aborts"),
    counter("proxy.process.http.transaction_counts.errors.connect_failed"),
    counter("proxy.process.http.transaction_totaltime.errors.connect_failed"),
    counter("proxy.process.http.transaction_counts.errors.other"),
    counter("proxy.process.http.transaction_totaltime.errors.other"),
    counter("proxy.process.http.transaction_counts.other.unclassified"),
    counter("proxy.process.http.transaction_totaltime.other.unclassified"),
    counter("proxy.process.http.disallowed_post_100_continue"),
    counter("proxy.process.http.total_x_redirect_count"),
    counter("proxy.process.https.incoming_requests"),
    counter("proxy.process.https.total_client_connections"),
    counter("proxy.process.http.origin_connections_throttled_out"),
    counter("proxy.process.http.post_body_too_large"),
    counter("proxy.process.http.milestone.ua_begin"),
    counter("proxy.process.http.milestone.ua_first_read"),
    counter("proxy.process.http.milestone.ua_read_header_done"),
    counter("proxy.process.http.milestone.ua_begin_write"),
    counter("proxy.process.http.milestone.ua_close"),
    counter("proxy.process.http.milestone.server_first_connect"),
    counter("proxy.process.http.milestone.server_connect"),
    counter("proxy.process.http.milestone.server_connect_end"),
    counter("proxy.process.http.milestone.server_begin_write"),
    counter("proxy.process.http.milestone.server_first_read"),
    counter("proxy.process.http.milestone.server_read_header_done"),
    counter("proxy.process.http.milestone.server_close"),
    counter("proxy.process.http.milestone.cache_open_read_begin"),
    counter("proxy.process.http.milestone.cache_open_read_end"),
    counter("proxy.process.http.milestone.cache_open_write_begin"),
    counter("proxy.process.http.milestone.cache_open_write_end"),
    counter("proxy.process.http.milestone.dns_lookup_begin"),
    counter("proxy.process.http.milestone.dns_lookup_end"),
    counter("proxy.process.http.milestone.sm_start"),
    counter("proxy.process.http.milestone.sm_finish"),
    counter("proxy.process.net.calls_to_read"),
    counter("proxy.process.net.calls_to_read_nodata"),
    counter("proxy.process.net.calls_to_readfromnet"),
    counter("proxy.process.net.calls_to_readfromnet_afterpoll"),
    counter("proxy.process.net.calls_to_write"),
    counter("proxy.process.net.calls_to_write_nodata"),
    counter("proxy.process.net.calls_to_writetonet"),
    counter("proxy.process.net.calls_to_writetonet_afterpoll"),
    counter("proxy.process.net.inactivity_cop_lock_acquire_failure"),
    counter("proxy.process.net.net_handler_run"),
    counter("proxy.process.net.read_bytes"),
    counter("proxy.process.net.write_bytes"),
    counter("proxy.process.net.fastopen_out.attempts"),
    counter("proxy.process.net.fastopen_out.successes"),
    counter("proxy.process.socks.connections_successful"),
    counter("proxy.process.socks.connections_unsuccessful"),
    counter("proxy.process.net.connections_throttled_in"),
    counter("proxy.process.net.connections_throttled_out"),
    counter("proxy.process.net.max.requests_throttled_in"),
    counter("proxy.process.cache.read_per_sec"),
    counter("proxy.process.cache.write_per_sec"),
    counter("proxy.process.cache.KB_read_per_sec"),
    counter("proxy.process.cache.KB_write_per_sec"),
    counter("proxy.process.hostdb.total_lookups"),
    counter("proxy.process.hostdb.total_hits"),
    counter("proxy.process.hostdb.ttl"),
    counter("proxy.process.hostdb.ttl_expires"),
    counter("proxy.process.hostdb.re_dns_on_reload"),
    counter("proxy.process.hostdb.insert_duplicate_to_pending_dns"),
    counter("proxy.process.dns.total_dns_lookups"),
    counter("proxy.process.dns.lookup_avg_time"),
    counter("proxy.process.dns.lookup_successes"),
    counter("proxy.process.dns.fail_avg_time"),
    counter("proxy.process.dns.lookup_failures"),
    counter("proxy.process.dns.retries"),
    counter("proxy.process.dns.max_retries_exceeded"),
    counter("proxy.process.http2.total_client_streams"),
    counter("proxy.process.http2.total_transactions_time"),
    counter("proxy.process.http2.total_client_connections"),
    counter("proxy.process.http2.connection_errors"),
    counter("proxy.process.http2.stream_errors"),
    counter("proxy.process.http2.session_die_default"),
    counter("proxy.process.http2.session_die_other"),
    counter("proxy.process.http2.session_die_eos"),
    counter("proxy.process.http2.session_die_active"),
    counter("proxy.process.http2.session_die_inactive"),
    counter("proxy.process.http2.session_die_error"),
    counter("proxy.process.http2.session_die_high_error_rate"),
    counter("proxy.process.http2.max_settings_per_frame_exceeded"),
    counter("proxy.process.http2.max_settings_per_minute_exceeded"),
    counter("proxy.process.http2.max_settings_frames_per_minute_exceeded"),
    counter("proxy.process.http2.max_ping_frames_per_minute_exceeded"),
    counter("proxy.process.http2.max_priority_frames_per_minute_exceeded"),
    counter("proxy.process.http2.insufficient_avg_window_update"),
    counter("proxy.process.log.event_log_error_ok"),
    counter("proxy.process.log.event_log_error_skip"),
    counter("proxy.process.log.event_log_error_aggr"),
    counter("proxy.process.log.event_log_error_full"),
    counter("proxy.process.log.event_log_error_fail"),
    counter("proxy.process.log.event_log_access_ok"),
    counter("proxy.process.log.event_log_access_skip"),
    counter("proxy.process.log.event_log_access_aggr"),
    counter("proxy.process.log.event_log_access_full"),
    counter("proxy.process.log.event_log_access_fail"),
    counter("proxy.process.log.num_sent_to_network"),
    counter("proxy.process.log.num_lost_before_sent_to_network"),
    counter("proxy.process.log.num_received_from_network"),
    counter("proxy.process.log.num_flush_to_disk"),
    counter("proxy.process.log.num_lost_before_flush_to_disk"),
    counter("proxy.process.log.bytes_lost_before_preproc"),
    counter("proxy.process.log.bytes_sent_to_network"),
    counter("proxy.process.log.bytes_lost_before_sent_to_network"),
    counter("proxy.process.log.bytes_received_from_network"),
    counter("proxy.process.log.bytes_flush_to_disk"),
    counter("proxy.process.log.bytes_lost_before_flush_to_disk"),
    counter("proxy.process.log.bytes_written_to_disk"),
    counter("proxy.process.log.bytes_lost_before_written_to_disk"),
    counter("proxy.process.ssl.user_agent_other_errors"),
    counter("proxy.process.ssl.user_agent_expired_cert"),
    counter("proxy.process.ssl.user_agent_revoked_cert"),
    counter("proxy.process.ssl.user_agent_unknown_cert"),
    counter("proxy.process.ssl.user_agent_cert_verify_failed"),
    counter("proxy.process.ssl.user_agent_bad_cert"),
    counter("proxy.process.ssl.user_agent_decryption_failed"),
    counter("proxy.process.ssl.user_agent_wrong_version"),
    counter("proxy.process.ssl.user_agent_unknown_ca"),
    counter("proxy.process.ssl.origin_server_other_errors"),
    counter("proxy.process.ssl.origin_server_expired_cert"),
    counter("proxy.process.ssl.origin_server_revoked_cert"),
    counter("proxy.process.ssl.origin_server_unknown_cert"),
    counter("proxy.process.ssl.origin_server_cert_verify_failed"),
    counter("proxy.process.ssl.origin_server_bad_cert"),
    counter("proxy.process.ssl.origin_server_decryption_failed"),
    counter("proxy.process.ssl.origin_server_wrong_version"),
    counter("proxy.process.ssl.origin_server_unknown_ca"),
    counter("proxy.process.ssl.total_handshake_time"),
    counter("proxy.process.ssl.total_attempts_handshake_count_in"),
    counter("proxy.process.ssl.total_success_handshake_count_in"),
    counter("proxy.process.ssl.total_attempts_handshake_count_out"),
    counter("proxy.process.ssl.total_success_handshake_count_out"),
    counter("proxy.process.ssl.total_tickets_created"),
    counter("proxy.process.ssl.total_tickets_verified"),
    counter("proxy.process.ssl.total_tickets_not_found"),
    counter("proxy.process.ssl.total_tickets_renewed"),
    counter("proxy.process.ssl.total_tickets_verified_old_key"),
    counter("proxy.process.ssl.total_ticket_keys_renewed"),
    counter("proxy.process.ssl.ssl_session_cache_hit"),
    counter("proxy.process.ssl.ssl_session_cache_new_session"),
    counter("proxy.process.ssl.ssl_session_cache_miss"),
    counter("proxy.process.ssl.ssl_session_cache_eviction"),
    counter("proxy.process.ssl.ssl_session_cache_lock_contention"),
    counter("proxy.process.ssl.default_record_size_count"),
    counter("proxy.process.ssl.max_record_size_count"),
    counter("proxy.process.ssl.redo_record_size_count"),
    counter("proxy.process.ssl.ssl_error_syscall"),
    counter("proxy.process.ssl.ssl_error_ssl"),
    counter("proxy.process.ssl.ssl_sni_name_set_failure"),
    counter("proxy.process.ssl.ssl_ocsp_revoked_cert_stat"),
    counter("proxy.process.ssl.ssl_ocsp_unknown_cert_stat"),
    counter("proxy.process.ssl.ssl_ocsp_refreshed_cert"),
    counter("proxy.process.ssl.ssl_ocsp_refresh_cert_failure"),
    counter("proxy.process.ssl.ssl_total_sslv3"),
    counter("proxy.process.ssl.ssl_total_tlsv1"),
    counter("proxy.process.ssl.ssl_total_tlsv11"),
    counter("proxy.process.ssl.ssl_total_tlsv12"),
    counter("proxy.process.ssl.ssl_total_tlsv13"),
    counter("proxy.process.ssl.early_data_received"),
    counter("proxy.node.config.reconfigure_required"),
    counter("proxy.node.config.restart_required.proxy"),
    counter("proxy.node.config.restart_required.manager"),
    counter("proxy.node.config.draining"),
    counter("proxy.process.http.background_fill_current_count"),
    counter("proxy.process.http.current_client_connections"),
    counter("proxy.process.http.current_active_client_connections"),
    counter("proxy.process.http.websocket.current_active_client_connections"),
    counter("proxy.process.http.current_client_transactions"),
    counter("proxy.process.http.current_server_transactions"),
    counter("proxy.process.http.origin_shutdown.pool_lock_contention"),
    counter("proxy.process.http.origin_shutdown.migration_failure"),
    counter("proxy.process.http.origin_shutdown.tunnel_server"),
    counter("proxy.process.http.origin_shutdown.tunnel_server_no_keep_alive"),
    counter("proxy.process.http.origin_shutdown.tunnel_server_eos"),
    counter("proxy.process.http.origin_shutdown.tunnel_server_plugin_tunnel"),
    counter("proxy.process.http.origin_shutdown.tunnel_server_detach"),
    counter("proxy.process.http.origin_shutdown.tunnel_client"),
    counter("proxy.process.http.origin_shutdown.tunnel_transform_read"),
    counter("proxy.process.http.origin_shutdown.release_no_sharing"),
    counter("proxy.process.http.origin_shutdown.release_no_server"),
    counter("proxy.process.http.origin_shutdown.release_no_keep_alive"),
    counter("proxy.process.http.origin_shutdown.release_invalid_response"),
    counter("proxy.process.http.origin_shutdown.release_invalid_request"),
    counter("proxy.process.http.origin_shutdown.release_modified"),
    counter("proxy.process.http.origin_shutdown.release_misc"),
    counter("proxy.process.http.origin_shutdown.cleanup_entry"),
    counter("proxy.process.http.origin_shutdown.tunnel_abort"),
    counter("proxy.process.http.current_parent_proxy_connections"),
    counter("proxy.process.http.current_server_connections"),
    counter("proxy.process.http.current_cache_connections"),
    counter("proxy.process.http.origin.connect.adjust_thread"),
    counter("proxy.process.http.cache.open_write.adjust_thread"),
    counter("proxy.process.net.accepts_currently_open"),
    counter("proxy.process.net.connections_currently_open"),
    counter("proxy.process.net.default_inactivity_timeout_applied"),
    counter("proxy.process.net.default_inactivity_timeout_count"),
    counter("proxy.process.net.dynamic_keep_alive_timeout_in_count"),
    counter("proxy.process.net.dynamic_keep_alive_timeout_in_total"),
    counter("proxy.process.socks.connections_currently_open"),
    counter("proxy.process.tcp.total_accepts"),
    counter("proxy.process.cache.bytes_used"),
    counter("proxy.process.cache.bytes_total"),
    counter("proxy.process.cache.ram_cache.total_bytes"),
    counter("proxy.process.cache.ram_cache.bytes_used"),
    counter("proxy.process.cache.ram_cache.hits"),
    counter("proxy.process.cache.ram_cache.misses"),
    counter("proxy.process.cache.pread_count"),
    counter("proxy.process.cache.percent_full"),
    counter("proxy.process.cache.lookup.active"),
    counter("proxy.process.cache.lookup.success"),
    counter("proxy.process.cache.lookup.failure"),
    counter("proxy.process.cache.read.active"),
    counter("proxy.process.cache.read.success"),
    counter("proxy.process.cache.read.failure"),
    counter("proxy.process.cache.write.active"),
    counter("proxy.process.cache.write.success"),
    counter("proxy.process.cache.write.failure"),
    counter("proxy.process.cache.write.backlog.failure"),
    counter("proxy.process.cache.update.active"),
    counter("proxy.process.cache.update.success"),
    counter("proxy.process.cache.update.failure"),
    counter("proxy.process.cache.remove.active"),
    counter("proxy.process.cache.remove.success"),
    counter("proxy.process.cache.remove.failure"),
    counter("proxy.process.cache.evacuate.active"),
    counter("proxy.process.cache.evacuate.success"),
    counter("proxy.process.cache.evacuate.failure"),
    counter("proxy.process.cache.scan.active"),
    counter("proxy.process.cache.scan.success"),
    counter("proxy.process.cache.scan.failure"),
    counter("proxy.process.cache.direntries.total"),
    counter("proxy.process.cache.direntries.used"),
    counter("proxy.process.cache.directory_collision"),
    counter("proxy.process.cache.frags_per_doc.1"),
    counter("proxy.process.cache.frags_per_doc.2"),
    counter("proxy.process.cache.read_busy.success"),
    counter("proxy.process.cache.read_busy.failure"),
    counter("proxy.process.cache.write_bytes_stat"),
    counter("proxy.process.cache.vector_marshals"),
    counter("proxy.process.cache.hdr_marshals"),
    counter("proxy.process.cache.hdr_marshal_bytes"),
    counter("proxy.process.cache.gc_bytes_evacuated"),
    counter("proxy.process.cache.gc_frags_evacuated"),
    counter("proxy.process.cache.wrap_count"),
    counter("proxy.process.cache.sync.count"),
    counter("proxy.process.cache.sync.bytes"),
    counter("proxy.process.cache.sync.time"),
    counter("proxy.process.cache.span.errors.read"),
    counter("proxy.process.cache.span.errors.write"),
    counter("proxy.process.cache.span.failing"),
    counter("proxy.process.cache.span.offline"),
    counter("proxy.process.cache.span.online"),
    counter("proxy.process.dns.success_avg_time"),
    counter("proxy.process.dns.in_flight"),
    counter("proxy.process.eventloop.count.10s"),
    counter("proxy.process.eventloop.events.10s"),
    counter("proxy.process.eventloop.events.min.10s"),
    counter("proxy.process.eventloop.events.max.10s"),
    counter("proxy.process.eventloop.wait.10s"),
    counter("proxy.process.eventloop.time.min.10s"),
    counter("proxy.process.eventloop.time.max.10s"),
    counter("proxy.process.eventloop.count.100s"),
    counter("proxy.process.eventloop.events.100s"),
    counter("proxy.process.eventloop.events.min.100s"),
    counter("proxy.process.eventloop.events.max.100s"),
    counter("proxy.process.eventloop.wait.100s"),
    counter("proxy.process.eventloop.time.min.100s"),
    counter("proxy.process.eventloop.time.max.100s"),
    counter("proxy.process.eventloop.count.1000s"),
    counter("proxy.process.eventloop.events.1000s"),
    counter("proxy.process.eventloop.events.min.1000s"),
    counter("proxy.process.eventloop.events.max.1000s"),
    counter("proxy.process.eventloop.wait.1000s"),
    counter("proxy.process.eventloop.time.min.1000s"),
    counter("proxy.process.eventloop.time.max.1000s"),
    counter("proxy.process.traffic_server.memory.rss"),
    counter("proxy.process.http2.current_client_connections"),
    counter("proxy.process.http2.current_active_client_connections"),
    counter("proxy.process.http2.current_client_streams"),
    counter("proxy.process.hostdb.cache.current_items"),
    counter("proxy.process.hostdb.cache.current_size"),
    counter("proxy.process.hostdb.cache.total_inserts"),
    counter("proxy.process.hostdb.cache.total_failed_inserts"),
    counter("proxy.process.hostdb.cache.total_lookups"),
    counter("proxy.process.hostdb.cache.total_hits"),
    counter("proxy.process.hostdb.cache.last_sync.time"),
    counter("proxy.process.hostdb.cache.last_sync.total_items"),
    counter("proxy.process.hostdb.cache.last_sync.total_size"),
    counter("proxy.process.log.log_files_open"),
    counter("proxy.process.log.log_files_space_used"),
    counter("plugin.lua.global.states"),
    counter("plugin.lua.global.gc_bytes"),
    counter("plugin.lua.global.threads"),
    counter("proxy.process.ssl.user_agent_sessions"),
    counter("proxy.process.ssl.user_agent_session_hit"),
    counter("proxy.process.ssl.user_agent_session_miss"),
    counter("proxy.process.ssl.user_agent_session_timeout"),
    counter("proxy.process.ssl.cipher.user_agent.TLS_AES_256_GCM_SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.TLS_CHACHA20_POLY1305_SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.TLS_AES_128_GCM_SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-ECDSA-AES256-GCM-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-RSA-AES256-GCM-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-RSA-AES256-GCM-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-ECDSA-CHACHA20-POLY1305"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-RSA-CHACHA20-POLY1305"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-RSA-CHACHA20-POLY1305"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-ECDSA-AES128-GCM-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-RSA-AES128-GCM-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-RSA-AES128-GCM-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-ECDSA-AES256-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-RSA-AES256-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-RSA-AES256-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-ECDSA-AES128-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-RSA-AES128-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-RSA-AES128-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-ECDSA-AES256-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-RSA-AES256-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-RSA-AES256-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-ECDSA-AES128-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-RSA-AES128-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-RSA-AES128-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.RSA-PSK-AES256-GCM-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-PSK-AES256-GCM-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.RSA-PSK-CHACHA20-POLY1305"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-PSK-CHACHA20-POLY1305"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-PSK-CHACHA20-POLY1305"),
    counter("proxy.process.ssl.cipher.user_agent.AES256-GCM-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.PSK-AES256-GCM-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.PSK-CHACHA20-POLY1305"),
    counter("proxy.process.ssl.cipher.user_agent.RSA-PSK-AES128-GCM-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-PSK-AES128-GCM-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.AES128-GCM-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.PSK-AES128-GCM-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.AES256-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.AES128-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-PSK-AES256-CBC-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-PSK-AES256-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.SRP-RSA-AES-256-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.SRP-AES-256-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.RSA-PSK-AES256-CBC-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-PSK-AES256-CBC-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.RSA-PSK-AES256-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-PSK-AES256-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.AES256-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.PSK-AES256-CBC-SHA384"),
    counter("proxy.process.ssl.cipher.user_agent.PSK-AES256-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-PSK-AES128-CBC-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.ECDHE-PSK-AES128-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.SRP-RSA-AES-128-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.SRP-AES-128-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.RSA-PSK-AES128-CBC-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-PSK-AES128-CBC-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.RSA-PSK-AES128-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.DHE-PSK-AES128-CBC-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.AES128-SHA"),
    counter("proxy.process.ssl.cipher.user_agent.PSK-AES128-CBC-SHA256"),
    counter("proxy.process.ssl.cipher.user_agent.PSK-AES128-CBC-SHA"),
    counter("proxy.process.cache.volume_1.bytes_used"),
    counter("proxy.process.cache.volume_1.bytes_total"),
    counter("proxy.process.cache.volume_1.ram_cache.total_bytes"),
    counter("proxy.process.cache.volume_1.ram_cache.bytes_used"),
    counter("proxy.process.cache.volume_1.ram_cache.hits"),
    counter("proxy.process.cache.volume_1.ram_cache.misses"),
    counter("proxy.process.cache.volume_1.pread_count"),
    counter("proxy.process.cache.volume_1.percent_full"),
    counter("proxy.process.cache.volume_1.lookup.active"),
    counter("proxy.process.cache.volume_1.lookup.success"),
    counter("proxy.process.cache.volume_1.lookup.failure"),
    counter("proxy.process.cache.volume_1.read.active"),
    counter("proxy.process.cache.volume_1.read.success"),
    counter("proxy.process.cache.volume_1.read.failure"),
    counter("proxy.process.cache.volume_1.write.active"),
    counter("proxy.process.cache.volume_1.write.success"),
    counter("proxy.process.cache.volume_1.write.failure"),
    counter("proxy.process.cache.volume_1.write.backlog.failure"),
    counter("proxy.process.cache.volume_1.update.active"),
    counter("proxy.process.cache.volume_1.update.success"),
    counter("proxy.process.cache.volume_1.update.failure"),
    counter("proxy.process.cache.volume_1.remove.active"),
    counter("proxy.process.cache.volume_1.remove.success"),
    counter("proxy.process.cache.volume_1.remove.failure"),
    counter("proxy.process.cache.volume_1.evacuate.active"),
    counter("proxy.process.cache.volume_1.evacuate.success"),
    counter("proxy.process.cache.volume_1.evacuate.failure"),
    counter("proxy.process.cache.volume_1.scan.active"),
    counter("proxy.process.cache.volume_1.scan.success"),
    counter("proxy.process.cache.volume_1.scan.failure"),
    counter("proxy.process.cache.volume_1.direntries.total"),
    counter("proxy.process.cache.volume_1.direntries.used"),
    counter("proxy.process.cache.volume_1.directory_collision"),
    counter("proxy.process.cache.volume_1.frags_per_doc.1"),
    counter("proxy.process.cache.volume_1.frags_per_doc.2"),
    counter("proxy.process.cache.volume_1.read_busy.success"),
    counter("proxy.process.cache.volume_1.read_busy.failure"),
    counter("proxy.process.cache.volume_1.write_bytes_stat"),
    counter("proxy.process.cache.volume_1.vector_marshals"),
    counter("proxy.process.cache.volume_1.hdr_marshals"),
    counter("proxy.process.cache.volume_1.hdr_marshal_bytes"),
    counter("proxy.process.cache.volume_1.gc_bytes_evacuated"),
    counter("proxy.process.cache.volume_1.gc_frags_evacuated"),
    counter("proxy.process.cache.volume_1.wrap_count"),
    counter("proxy.process.cache.volume_1.sync.count"),
    counter("proxy.process.cache.volume_1.sync.bytes"),
    counter("proxy.process.cache.volume_1.sync.time"),
    counter("proxy.process.cache.volume_1.span.errors.read"),
    counter("proxy.process.cache.volume_1.span.errors.write"),
    counter("proxy.process.cache.volume_1.span.failing"),
    counter("proxy.process.cache.volume_1.span.offline"),
    counter("proxy.process.cache.volume_1.span.online"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::naming::{NAMESPACE, metric_name};

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for field in STATS {
            assert!(seen.insert(field.key), "duplicate key: {}", field.key);
        }
    }

    #[test]
    fn sanitized_names_are_unique() {
        let mut seen = HashSet::new();
        for field in STATS {
            let name = metric_name(NAMESPACE, field.key);
            assert!(seen.insert(name.clone()), "name collision: {name}");
        }
    }

    #[test]
    fn table_covers_known_sections() {
        assert_eq!(STATS.len(), 617);
        assert!(lookup("proxy.node.restarts.proxy.stop_time").is_some());
        assert!(lookup("proxy.process.cache.bytes_used").is_some());
        assert!(lookup("proxy.process.http.response_document_size_1K").is_some());
        assert!(lookup("plugin.lua.global.threads").is_some());
        assert!(lookup("proxy.process.not_a_stat").is_none());
    }

    #[test]
    fn every_entry_is_curated_as_counter() {
        assert!(STATS.iter().all(|f| f.kind == MetricKind::Counter));
    }

    #[test]
    fn kind_keywords() {
        assert_eq!(MetricKind::Counter.as_str(), "counter");
        assert_eq!(MetricKind::Gauge.to_string(), "gauge");
    }
}
