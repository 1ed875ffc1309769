//! Benchmarks for decoding performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tablewalk_core::{Instruction, Mode};
use tablewalk_disasm::{DecodeFlags, DecoderConfig, Disassembler, X86Disassembler};

/// A small 64-bit function mixing moves, arithmetic, branches and a
/// RIP-relative load.
const X64_CODE: &[u8] = &[
    0x55, // push rbp
    0x48, 0x89, 0xe5, // mov rbp, rsp
    0x48, 0x83, 0xec, 0x20, // sub rsp, 0x20
    0x48, 0x89, 0x7d, 0xf8, // mov [rbp-8], rdi
    0x48, 0x8b, 0x05, 0x10, 0x00, 0x00, 0x00, // mov rax, [rip+0x10]
    0x48, 0x83, 0xc0, 0x01, // add rax, 1
    0x48, 0x83, 0x7d, 0xf0, 0x0a, // cmp qword [rbp-16], 10
    0x7e, 0x07, // jle .L1
    0xb8, 0x01, 0x00, 0x00, 0x00, // mov eax, 1
    0xeb, 0x05, // jmp .L2
    0xb8, 0x00, 0x00, 0x00, 0x00, // .L1: mov eax, 0
    0xf3, 0x0f, 0x10, 0x45, 0xe8, // .L2: movss xmm0, [rbp-24]
    0x48, 0x83, 0xc4, 0x20, // add rsp, 0x20
    0x5d, // pop rbp
    0xc3, // ret
];

/// A 32-bit function with SIB addressing, x87 and string operations.
const X86_CODE: &[u8] = &[
    0x55, // push ebp
    0x89, 0xe5, // mov ebp, esp
    0x8b, 0x44, 0x24, 0x08, // mov eax, [esp+8]
    0xd9, 0xe8, // fld1
    0xdc, 0x45, 0x08, // fadd qword [ebp+8]
    0xf3, 0xa5, // rep movsd
    0x0f, 0x84, 0x02, 0x00, 0x00, 0x00, // jz +2
    0xf6, 0xd8, // neg al
    0xc7, 0x00, 0x05, 0x00, 0x00, 0x00, // mov dword [eax], 5
    0x5d, // pop ebp
    0xc3, // ret
];

/// Repeats `pattern` up to `size` bytes.
fn generate_large_block(pattern: &[u8], size: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        let to_copy = remaining.min(pattern.len());
        result.extend_from_slice(&pattern[..to_copy]);
    }
    result
}

fn bench_mode(c: &mut Criterion, name: &str, mode: Mode, code: &[u8]) {
    let disasm = X86Disassembler::new(mode);

    let mut group = c.benchmark_group(name);

    group.bench_function("single_instruction", |b| {
        b.iter(|| {
            let _ = disasm.decode_instruction(black_box(&code[1..]), 0x1000);
        })
    });

    group.bench_function("small_function", |b| {
        b.iter(|| {
            let _ = disasm.disassemble_block(black_box(code), 0x1000);
        })
    });

    // Reusing one record avoids per-instruction allocation
    group.bench_function("decode_into", |b| {
        let mut insn = Instruction::new(0x1000, mode);
        b.iter(|| {
            let mut offset = 0;
            while offset < code.len() {
                let address = 0x1000 + offset as u64;
                match disasm.decode_into(black_box(&code[offset..]), address, &mut insn) {
                    Ok(()) => offset += insn.size,
                    Err(_) => offset += 1,
                }
            }
        })
    });

    for size in [1024, 4096, 16384, 65536] {
        let block = generate_large_block(code, size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("throughput", size), &block, |b, block| {
            b.iter(|| {
                let _ = disasm.disassemble_block(black_box(block), 0x1000);
            })
        });
    }

    group.finish();
}

fn bench_x64(c: &mut Criterion) {
    bench_mode(c, "x64_disassembly", Mode::Bits64, X64_CODE);
}

fn bench_x86(c: &mut Criterion) {
    bench_mode(c, "x86_disassembly", Mode::Bits32, X86_CODE);
}

fn bench_length_only(c: &mut Criterion) {
    let config = DecoderConfig::new(Mode::Bits64).with_flags(DecodeFlags::empty());
    let disasm = X86Disassembler::with_config(config);
    let block = generate_large_block(X64_CODE, 16384);

    let mut group = c.benchmark_group("length_only");
    group.throughput(Throughput::Bytes(block.len() as u64));
    group.bench_function("x64", |b| {
        b.iter(|| {
            let _ = disasm.disassemble_block(black_box(&block), 0x1000);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_x64, bench_x86, bench_length_only);
criterion_main!(benches);
