use criterion::*;

fn bench_localaddrs_ipv4(c: &mut Criterion) {
  c.bench_function("localaddrs::ipv4_addrs", |b| {
    b.iter(|| {
      localaddrs::ipv4_addrs(64).unwrap();
    })
  });
}

fn bench_localaddrs_private_ipv4(c: &mut Criterion) {
  c.bench_function("localaddrs::private_ipv4_addrs", |b| {
    b.iter(|| {
      localaddrs::private_ipv4_addrs(64).unwrap();
    })
  });
}

fn bench_local_ip_address_list(c: &mut Criterion) {
  c.bench_function("local_ip_address::list_afinet_netifas", |b| {
    b.iter(|| {
      local_ip_address::list_afinet_netifas().unwrap();
    })
  });
}

criterion_group!(
  localaddrs_benches,
  bench_localaddrs_ipv4,
  bench_localaddrs_private_ipv4,
);

criterion_group!(comparison_benches, bench_local_ip_address_list);

criterion_main!(localaddrs_benches, comparison_benches);
