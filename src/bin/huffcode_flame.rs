use huffcode::Codec;

fn main() {
    let corpus = "it was the best of times, it was the worst of times,\n\
                  it was the age of wisdom, it was the age of foolishness,\n"
        .repeat(200);

    for _ in 0..1000 {
        let codec = Codec::build(&corpus).unwrap();
        let encoded = codec.encode(corpus.trim()).unwrap();
        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded.len(), corpus.trim().len());
    }
}
